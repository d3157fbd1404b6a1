//! Identifier errors

use pdfbib_domain::BibcodeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// No line of the text yields an identifier
    #[error("no identifier found in article text")]
    NotFound,

    #[error("invalid preprint identifier: {0:?}")]
    InvalidPreprint(String),

    #[error(transparent)]
    Bibcode(#[from] BibcodeError),
}
