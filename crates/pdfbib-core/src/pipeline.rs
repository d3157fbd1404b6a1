//! End-to-end pipeline: article text to query URL, response page to record

use pdfbib_bibtex::{format_journal, parse_entry, CitationRecord};
use pdfbib_domain::Identifier;
use pdfbib_identifiers::{BibcodeResolver, IdentifierExtractor, QueryUrlBuilder};
use serde::Serialize;
use tracing::info;

use crate::config::PdfbibConfig;
use crate::error::{PdfbibError, Result};
use crate::response::record_lines;

/// An identifier together with the URL that fetches its record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub identifier: Identifier,
    pub url: String,
}

/// Wires extraction, URL construction and record import for one configuration
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PdfbibConfig,
    extractor: IdentifierExtractor,
    urls: QueryUrlBuilder,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PdfbibConfig::default())
    }
}

impl Pipeline {
    pub fn new(config: PdfbibConfig) -> Self {
        let resolver = BibcodeResolver::new(config.journal_table());
        Self {
            extractor: IdentifierExtractor::new(resolver),
            urls: config.query_builder(),
            config,
        }
    }

    pub fn config(&self) -> &PdfbibConfig {
        &self.config
    }

    /// Identifier of the article whose first page is `lines`
    pub fn identify<S: AsRef<str>>(&self, lines: &[S]) -> Result<Identifier> {
        let identifier = self.extractor.extract(lines)?;
        info!(%identifier, "identified article");
        Ok(identifier)
    }

    /// Identifier and ADS query URL for an article
    pub fn lookup_url<S: AsRef<str>>(&self, lines: &[S]) -> Result<Lookup> {
        let identifier = self.identify(lines)?;
        let url = self.urls.url(&identifier)?;
        Ok(Lookup { identifier, url })
    }

    /// Record from an ADS query response page
    pub fn import_response(&self, body: &str) -> Result<CitationRecord> {
        let lines = record_lines(body).ok_or(PdfbibError::EmptyResponse)?;
        self.import_block(&lines)
    }

    /// Record from the lines of one record block
    pub fn import_block<S: AsRef<str>>(&self, lines: &[S]) -> Result<CitationRecord> {
        let record = parse_entry(lines)?;
        let record = self.finish(&record)?;
        info!(reference = record.reference(), "imported record");
        Ok(record)
    }

    /// Short journal name, and ADS links pointing at the canonical host
    fn finish(&self, record: &CitationRecord) -> Result<CitationRecord> {
        let mut builder = record.to_builder();

        if let Some(journal) = record.journal() {
            builder.field("journal", format_journal(journal));
        }

        if let Some(adsurl) = record.get_field("adsurl") {
            let mirror = &self.config.mirror;
            let url = adsurl.replace(mirror.host.as_str(), mirror.canonical_host.as_str());
            builder.field("adsurl", url.clone()).field("url", url);
        }

        Ok(builder.build()?)
    }
}
