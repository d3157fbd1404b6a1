//! ADS bibcodes
//!
//! A bibcode is a fixed-width 19-character code:
//!
//! ```text
//! YYYY JJJJJ VVVV Q PPPP A
//! 1998 apj.. .495 . 1234 .
//! ```
//!
//! year, journal code (left-aligned), volume (right-aligned), qualifier
//! (`.` or `l` for letters), page (right-aligned) and first-author initial.
//! All padding uses `.`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Total length of every bibcode
pub const BIBCODE_LEN: usize = 19;

/// Padding character
pub const FILLER: char = '.';

/// Qualifier marking a letters section
pub const LETTER_QUALIFIER: char = 'l';

const YEAR_WIDTH: usize = 4;
const JOURNAL_WIDTH: usize = 5;
const VOLUME_WIDTH: usize = 4;
const PAGE_WIDTH: usize = 4;

/// Errors raised when building or decomposing a bibcode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BibcodeError {
    #[error("bibcode must be 19 ASCII characters, got {0:?}")]
    Length(String),
    #[error("invalid bibcode year: {0:?}")]
    Year(String),
    #[error("invalid bibcode {field}: {value:?}")]
    Field { field: &'static str, value: String },
}

/// A decomposed ADS bibcode
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bibcode {
    year: u16,
    journal: String,
    volume: String,
    qualifier: char,
    page: String,
    initial: char,
}

impl Bibcode {
    /// Build a bibcode with an unknown author initial.
    pub fn new(
        year: u16,
        journal: impl Into<String>,
        volume: impl Into<String>,
        qualifier: char,
        page: impl Into<String>,
    ) -> Result<Self, BibcodeError> {
        if !(1000..=9999).contains(&year) {
            return Err(BibcodeError::Year(year.to_string()));
        }
        let journal = journal.into();
        let volume = volume.into();
        let page = page.into();
        check_component("journal", &journal, JOURNAL_WIDTH)?;
        check_component("volume", &volume, VOLUME_WIDTH)?;
        check_component("page", &page, PAGE_WIDTH)?;
        check_slot("qualifier", qualifier)?;

        Ok(Self {
            year,
            journal,
            volume,
            qualifier,
            page,
            initial: FILLER,
        })
    }

    /// Set the first-author initial slot
    pub fn with_initial(mut self, initial: char) -> Result<Self, BibcodeError> {
        check_slot("initial", initial)?;
        self.initial = initial;
        Ok(self)
    }

    /// Decompose a 19-character bibcode into its fields
    pub fn parse(code: &str) -> Result<Self, BibcodeError> {
        if code.len() != BIBCODE_LEN || !code.is_ascii() {
            return Err(BibcodeError::Length(code.to_string()));
        }

        let (year, rest) = code.split_at(YEAR_WIDTH);
        let (journal, rest) = rest.split_at(JOURNAL_WIDTH);
        let (volume, rest) = rest.split_at(VOLUME_WIDTH);
        let (qualifier, rest) = rest.split_at(1);
        let (page, initial) = rest.split_at(PAGE_WIDTH);

        let year: u16 = year
            .parse()
            .map_err(|_| BibcodeError::Year(year.to_string()))?;

        let mut bibcode = Self::new(
            year,
            journal.trim_end_matches(FILLER),
            volume.trim_start_matches(FILLER),
            first_char(qualifier),
            page.trim_start_matches(FILLER),
        )?;
        bibcode.initial = first_char(initial);
        Ok(bibcode)
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn journal(&self) -> &str {
        &self.journal
    }

    pub fn volume(&self) -> &str {
        &self.volume
    }

    pub fn qualifier(&self) -> char {
        self.qualifier
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn initial(&self) -> char {
        self.initial
    }

    /// Whether the qualifier marks a letters section
    pub fn is_letter(&self) -> bool {
        self.qualifier == LETTER_QUALIFIER
    }
}

impl fmt::Display for Bibcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:.<5}{:.>4}{}{:.>4}{}",
            self.year, self.journal, self.volume, self.qualifier, self.page, self.initial
        )
    }
}

impl FromStr for Bibcode {
    type Err = BibcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn check_component(field: &'static str, value: &str, width: usize) -> Result<(), BibcodeError> {
    let valid = !value.is_empty()
        && value.len() <= width
        && value.chars().all(|c| c.is_ascii_graphic() && c != FILLER);
    if valid {
        Ok(())
    } else {
        Err(BibcodeError::Field {
            field,
            value: value.to_string(),
        })
    }
}

fn check_slot(field: &'static str, value: char) -> Result<(), BibcodeError> {
    if value.is_ascii_graphic() {
        Ok(())
    } else {
        Err(BibcodeError::Field {
            field,
            value: value.to_string(),
        })
    }
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or(FILLER)
}
