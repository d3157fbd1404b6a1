//! pdfbib: from the first page of an astronomy article to its ADS record
//!
//! This crate ties the pieces together:
//! - [`Pipeline`]: identify an article, build its ADS query URL and import
//!   the record ADS returns
//! - [`PdfbibConfig`]: mirror hosts, preprint century cutoff and extra
//!   journal variants, loaded from TOML
//! - [`article_file_name`]: the file name an imported article is stored under
//! - [`logging::init`]: tracing subscriber setup

pub mod config;
pub mod error;
pub mod filename;
pub mod logging;
pub mod pipeline;
pub mod response;

pub use config::{ArxivConfig, JournalVariant, JournalsConfig, MirrorConfig, PdfbibConfig};
pub use error::{ConfigError, PdfbibError, Result};
pub use filename::article_file_name;
pub use pipeline::{Lookup, Pipeline};
pub use response::record_lines;

pub use pdfbib_bibtex::{CitationRecord, Library, LibraryParseResult};
pub use pdfbib_domain::{AuthorName, Bibcode, Identifier, IdentifierKind};
