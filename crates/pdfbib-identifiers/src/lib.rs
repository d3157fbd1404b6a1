//! Identifier extraction and ADS query URLs for astronomy articles
//!
//! This crate provides:
//! - DOI, arXiv id and bibcode extraction from first-page text
//! - Bibcode construction from journal reference lines
//! - Journal name variant table
//! - ADS BibTeX query URL construction

pub mod error;
pub mod extractors;
pub mod journals;
pub mod query;
pub mod resolver;

pub use error::*;
pub use extractors::*;
pub use journals::*;
pub use query::*;
pub use resolver::*;
