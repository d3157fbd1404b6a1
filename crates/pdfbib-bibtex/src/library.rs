//! A collection of citation records keyed by reference

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::braces::split_blocks;
use crate::error::{BibtexError, BibtexParseError};
use crate::formatter::format_records;
use crate::parser::{header_type, parse_entry};
use crate::record::CitationRecord;

/// Block types that carry no record
const NON_RECORD_TYPES: &[&str] = &["comment", "preamble", "string"];

/// Records keyed by reference, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    records: IndexMap<String, CitationRecord>,
}

/// Result of reading a library from text
#[derive(Debug, Clone, Default)]
pub struct LibraryParseResult {
    pub library: Library,
    pub errors: Vec<BibtexParseError>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record; its reference must not already be present
    pub fn add(&mut self, record: CitationRecord) -> Result<(), BibtexError> {
        if self.records.contains_key(record.reference()) {
            return Err(BibtexError::DuplicateReference(
                record.reference().to_string(),
            ));
        }
        self.records.insert(record.reference().to_string(), record);
        Ok(())
    }

    pub fn remove(&mut self, reference: &str) -> Option<CitationRecord> {
        self.records.shift_remove(reference)
    }

    pub fn get(&self, reference: &str) -> Option<&CitationRecord> {
        self.records.get(reference)
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.records.contains_key(reference)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CitationRecord> {
        self.records.values()
    }

    /// Records ordered by first author family, then year
    pub fn sorted(&self) -> Vec<&CitationRecord> {
        let mut records: Vec<&CitationRecord> = self.records.values().collect();
        records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        records
    }

    /// Render the whole library as record text
    pub fn serialize(&self) -> String {
        format_records(self.sorted())
    }

    /// Read records from text.
    ///
    /// Broken blocks and repeated references are reported in
    /// [`LibraryParseResult::errors`]; everything else is kept.
    pub fn deserialize(text: &str) -> LibraryParseResult {
        let mut result = LibraryParseResult::default();

        for block in split_blocks(text) {
            let kind = block.lines.iter().find_map(|line| header_type(line));
            if kind
                .as_deref()
                .is_some_and(|kind| NON_RECORD_TYPES.contains(&kind))
            {
                debug!(line = block.first_line, "skipping non-record block");
                continue;
            }

            let outcome = parse_entry(&block.lines).and_then(|record| result.library.add(record));
            if let Err(err) = outcome {
                warn!(line = block.first_line, error = %err, "dropping block");
                result.errors.push(BibtexParseError {
                    line: block.first_line,
                    message: err.to_string(),
                });
            }
        }

        result
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a CitationRecord;
    type IntoIter = indexmap::map::Values<'a, String, CitationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
