//! Domain types shared by the pdfbib crates
//!
//! This crate provides the canonical value types of the pipeline:
//! - Identifier: a DOI, arXiv preprint id, or ADS bibcode found in article text
//! - Bibcode: the fixed-width 19-character ADS catalog code
//! - AuthorName: family name plus initials as ADS writes them

pub mod author;
pub mod bibcode;
pub mod identifier;

pub use author::*;
pub use bibcode::*;
pub use identifier::*;
