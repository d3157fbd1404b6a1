//! Citation record data structures

use indexmap::IndexMap;
use pdfbib_domain::AuthorName;
use serde::Serialize;

use crate::error::BibtexError;
use crate::journal_macros::format_journal;

/// A parsed citation record.
///
/// Records are immutable: they are produced by [`CitationRecordBuilder`],
/// and any change goes through [`CitationRecord::to_builder`] to produce a
/// new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitationRecord {
    entry_type: String,
    reference: String,
    fields: IndexMap<String, String>,
    authors: Vec<AuthorName>,
}

impl CitationRecord {
    pub fn builder() -> CitationRecordBuilder {
        CitationRecordBuilder::new()
    }

    /// Lower-case entry type, e.g. `article`
    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    /// Unique record key (the ADS bibcode for ADS records)
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Remaining fields in their original order
    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    pub fn authors(&self) -> &[AuthorName] {
        &self.authors
    }

    /// Get a field value by key (case-insensitive)
    pub fn get_field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn title(&self) -> Option<&str> {
        self.get_field("title")
    }

    pub fn year(&self) -> Option<&str> {
        self.get_field("year")
    }

    pub fn doi(&self) -> Option<&str> {
        self.get_field("doi")
    }

    pub fn journal(&self) -> Option<&str> {
        self.get_field("journal")
    }

    /// Journal in its short printable form, falling back to the series for
    /// proceedings that have no journal
    pub fn journal_or_series(&self) -> Option<String> {
        self.journal()
            .map(format_journal)
            .or_else(|| self.get_field("series").map(str::to_string))
    }

    pub fn first_author(&self) -> Option<&AuthorName> {
        self.authors.first()
    }

    /// Key used to order records in a library: first author, then year
    pub fn sort_key(&self) -> (&str, &str) {
        (
            self.first_author().map(|a| a.family.as_str()).unwrap_or(""),
            self.year().unwrap_or(""),
        )
    }

    /// Start a builder holding a copy of this record
    pub fn to_builder(&self) -> CitationRecordBuilder {
        CitationRecordBuilder {
            entry_type: Some(self.entry_type.clone()),
            reference: Some(self.reference.clone()),
            fields: self.fields.clone(),
            authors: self.authors.clone(),
        }
    }
}

/// Accumulates record state; [`build`](Self::build) is the only way to
/// obtain a [`CitationRecord`].
#[derive(Debug, Clone, Default)]
pub struct CitationRecordBuilder {
    entry_type: Option<String>,
    reference: Option<String>,
    fields: IndexMap<String, String>,
    authors: Vec<AuthorName>,
}

impl CitationRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry type (stored lower-case)
    pub fn entry_type(&mut self, entry_type: &str) -> &mut Self {
        self.entry_type = Some(entry_type.trim().to_lowercase());
        self
    }

    pub fn reference(&mut self, reference: &str) -> &mut Self {
        self.reference = Some(reference.trim().to_string());
        self
    }

    /// Insert or replace a field. A replaced field keeps its position.
    pub fn field(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn remove_field(&mut self, key: &str) -> Option<String> {
        self.fields.shift_remove(key)
    }

    pub fn author(&mut self, author: AuthorName) -> &mut Self {
        self.authors.push(author);
        self
    }

    pub fn authors(&mut self, authors: Vec<AuthorName>) -> &mut Self {
        self.authors = authors;
        self
    }

    /// Produce the finished record
    pub fn build(&self) -> Result<CitationRecord, BibtexError> {
        let entry_type = self
            .entry_type
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| BibtexError::MalformedEntry("missing entry type".to_string()))?;
        let reference = self
            .reference
            .clone()
            .filter(|r| !r.is_empty())
            .ok_or_else(|| BibtexError::MalformedEntry("missing reference".to_string()))?;

        Ok(CitationRecord {
            entry_type,
            reference,
            fields: self.fields.clone(),
            authors: self.authors.clone(),
        })
    }
}
