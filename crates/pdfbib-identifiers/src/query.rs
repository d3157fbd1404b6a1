//! ADS BibTeX query URLs
//!
//! ```text
//! http://<mirror>/cgi-bin/nph-bib_query?&doi=<doi>&data_type=BIBTEX&db_key=AST&nocookieset=1
//! http://<mirror>/cgi-bin/nph-bib_query?&bibcode=<bibcode>&data_type=BIBTEX&db_key=AST&nocookieset=1
//! ```
//!
//! Preprints are queried by the bibcode ADS assigns them:
//! - old ids (`astro-ph/0601001`) become `2006astro.ph..1001`
//! - new ids (`1201.4773`) become `2012arxiv1201.4773`

use pdfbib_domain::{Identifier, FILLER};

use crate::error::IdentifierError;

/// ADS mirror queried when none is configured
pub const DEFAULT_MIRROR: &str = "esoads.eso.org";

/// Two-digit preprint years above this are 19xx, the rest 20xx
pub const DEFAULT_CENTURY_CUTOFF: u8 = 14;

const QUERY_PATH: &str = "/cgi-bin/nph-bib_query?";
const QUERY_SUFFIX: &str = "&data_type=BIBTEX&db_key=AST&nocookieset=1";

/// Width of subject prefix plus padded number in an old preprint bibcode
const OLD_PREPRINT_BODY_WIDTH: usize = 14;

/// Digits of month and sequence number at the end of an old preprint id
const OLD_PREPRINT_NUMBER_DIGITS: usize = 5;

/// Builds ADS BibTeX query URLs for identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryUrlBuilder {
    mirror: String,
    century_cutoff: u8,
}

impl Default for QueryUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MIRROR, DEFAULT_CENTURY_CUTOFF)
    }
}

impl QueryUrlBuilder {
    pub fn new(mirror: impl Into<String>, century_cutoff: u8) -> Self {
        Self {
            mirror: mirror.into(),
            century_cutoff,
        }
    }

    pub fn mirror(&self) -> &str {
        &self.mirror
    }

    pub fn century_cutoff(&self) -> u8 {
        self.century_cutoff
    }

    /// Query URL for an identifier
    pub fn url(&self, identifier: &Identifier) -> Result<String, IdentifierError> {
        let (key, value) = match identifier {
            Identifier::Doi(doi) => ("doi", doi.clone()),
            Identifier::Preprint(id) => ("bibcode", self.preprint_bibcode(id)?),
            Identifier::Bibcode(code) => ("bibcode", urlencoding::encode(code).into_owned()),
        };
        Ok(format!(
            "http://{}{}&{}={}{}",
            self.mirror, QUERY_PATH, key, value, QUERY_SUFFIX
        ))
    }

    /// ADS bibcode for a preprint id
    pub fn preprint_bibcode(&self, id: &str) -> Result<String, IdentifierError> {
        let invalid = || IdentifierError::InvalidPreprint(id.to_string());

        let (year, body) = match id.find('/') {
            Some(slash) => {
                let year = id.get(slash + 1..slash + 3).ok_or_else(invalid)?;
                let number = id
                    .len()
                    .checked_sub(OLD_PREPRINT_NUMBER_DIGITS)
                    .and_then(|start| id.get(start..))
                    .and_then(parse_digits)
                    .ok_or_else(invalid)?;
                let subject = if id.starts_with("hep") {
                    "hep.ph"
                } else {
                    "astro.ph"
                };
                let number = number.to_string();
                let padding = OLD_PREPRINT_BODY_WIDTH.saturating_sub(subject.len() + number.len());
                (
                    year,
                    format!("{}{}{}", subject, FILLER.to_string().repeat(padding), number),
                )
            }
            None => (id.get(..2).ok_or_else(invalid)?, format!("arxiv{}", id)),
        };

        let year = parse_digits(year).ok_or_else(invalid)?;
        Ok(format!("{}{}", self.full_year(year), body))
    }

    /// Expand a two-digit preprint year
    pub fn full_year(&self, year: u32) -> u32 {
        if year > u32::from(self.century_cutoff) {
            1900 + year
        } else {
            2000 + year
        }
    }
}

fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
