//! Error types for record parsing and library management

/// Error type for record and library failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BibtexError {
    /// The text block cannot be turned into a record
    #[error("Malformed entry: {0}")]
    MalformedEntry(String),

    /// A record with this reference is already in the library
    #[error("Duplicate reference: {0}")]
    DuplicateReference(String),
}

/// A failure tied to a position in a multi-record text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibtexParseError {
    /// 1-based line where the failing block starts
    pub line: u32,
    pub message: String,
}
