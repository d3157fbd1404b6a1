//! ADS record parsing and formatting
//!
//! Reads the BibTeX records ADS returns, normalizes their LaTeX escapes and
//! keeps them in a [`Library`] that serializes back to the same format.
//!
//! Features:
//! - Line-oriented record parser with nom header and field matchers
//! - Author list parsing into family name and initials
//! - LaTeX escape normalization
//! - Journal macro formatting
//! - Lenient library deserialization with per-block errors

mod author;
pub mod braces;
mod error;
mod formatter;
mod journal_macros;
mod latex_decoder;
mod library;
pub mod parser;
mod record;

pub use author::{parse_author, parse_author_list, split_authors, AUTHOR_SEPARATOR};
pub use error::{BibtexError, BibtexParseError};
pub use formatter::{format_record, format_records};
pub use journal_macros::{format_journal, is_journal_macro};
pub use latex_decoder::normalize_latex;
pub use library::{Library, LibraryParseResult};
pub use parser::{clean_value, parse_entry, parse_entry_text};
pub use record::{CitationRecord, CitationRecordBuilder};
