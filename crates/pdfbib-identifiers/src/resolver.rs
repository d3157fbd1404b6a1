//! Bibcode construction from a journal reference line
//!
//! When an article carries no explicit identifier, its first page usually
//! still prints a reference such as `The Astrophysical Journal, 495:1234-1240,
//! 1998`. The journal variant, volume, first page and year found on such a
//! line are enough to build the ADS bibcode.

use lazy_static::lazy_static;
use pdfbib_domain::{Bibcode, FILLER, LETTER_QUALIFIER};
use regex::{Match, Regex};
use tracing::debug;

use crate::error::IdentifierError;
use crate::journals::JournalTable;

lazy_static! {
    /// Volume, separator, optional letter marker, first page, optional range
    static ref VOLUME_PAGES: Regex = Regex::new(
        r"[0-9]{1,4}[:,\s]{1,4}l?[0-9]{1,4}(?:[-–—è]|\sy)?l?(?:[0-9]{1,4})?"
    ).unwrap();

    /// Same run, starting at the beginning of a digit sequence
    static ref VOLUME_PAGES_AT_NUMBER: Regex = Regex::new(
        r"(?:^|[^0-9])(?P<run>[0-9]{1,4}[:,\s]{1,4}l?[0-9]{1,4}(?:[-–—è]|\sy)?l?(?:[0-9]{1,4})?)"
    ).unwrap();

    static ref YEAR: Regex = Regex::new(r"[0-9]{4}").unwrap();
    static ref LEADING_DIGITS: Regex = Regex::new(r"^[0-9]+").unwrap();
    static ref PAGE: Regex = Regex::new(r"[0-9]{1,4}").unwrap();
}

/// Builds bibcodes from journal reference lines
#[derive(Debug, Clone, Default)]
pub struct BibcodeResolver {
    journals: JournalTable,
}

impl BibcodeResolver {
    pub fn new(journals: JournalTable) -> Self {
        Self { journals }
    }

    pub fn journals(&self) -> &JournalTable {
        &self.journals
    }

    /// Bibcode from the first line that holds a complete reference
    pub fn resolve<S: AsRef<str>>(&self, lines: &[S]) -> Result<Bibcode, IdentifierError> {
        for line in lines {
            match self.resolve_line(line.as_ref()) {
                Ok(bibcode) => return Ok(bibcode),
                Err(IdentifierError::NotFound) => {}
                Err(err) => debug!(error = %err, "skipping reference line"),
            }
        }
        Err(IdentifierError::NotFound)
    }

    /// Bibcode from a single line, or `NotFound` when the line holds no
    /// complete reference
    pub fn resolve_line(&self, line: &str) -> Result<Bibcode, IdentifierError> {
        let line = line.to_lowercase();

        let Some(journal) = self.journals.best_match(&line) else {
            return Err(IdentifierError::NotFound);
        };
        if !YEAR.is_match(&line) {
            return Err(IdentifierError::NotFound);
        }

        let Some(run) = volume_pages(&line) else {
            debug!(line = %line, "journal line without volume and page");
            return Err(IdentifierError::NotFound);
        };

        let volume = LEADING_DIGITS
            .find(run)
            .map(|m| m.as_str())
            .ok_or(IdentifierError::NotFound)?;
        let pages = &run[volume.len()..];
        let qualifier = if pages.contains(LETTER_QUALIFIER) {
            LETTER_QUALIFIER
        } else {
            FILLER
        };
        let page = PAGE
            .find(pages)
            .map(|m| m.as_str())
            .ok_or(IdentifierError::NotFound)?;

        let remainder = line.replace(journal.variant.as_str(), "").replacen(run, "", 1);
        let Some(year) = YEAR.find(&remainder) else {
            debug!(line = %line, "journal line without year");
            return Err(IdentifierError::NotFound);
        };
        let year: u16 = year
            .as_str()
            .parse()
            .map_err(|_| IdentifierError::NotFound)?;

        let bibcode = Bibcode::new(year, journal.code.as_str(), volume, qualifier, page)?;
        debug!(%bibcode, "built bibcode from journal line");
        Ok(bibcode)
    }
}

/// The volume/page run of a line.
///
/// Runs are tried at the start of each digit sequence. A run whose volume
/// looks like a year is passed over when a later run exists, so
/// `1998, 495, 1234` reads as volume 495, page 1234.
fn volume_pages(line: &str) -> Option<&str> {
    let mut candidates: Vec<Match<'_>> = Vec::new();
    let mut pos = 0;
    while let Some(caps) = VOLUME_PAGES_AT_NUMBER.captures_at(line, pos) {
        let Some(run) = caps.name("run") else { break };
        pos = run.start() + 1;
        candidates.push(run);
    }

    if candidates.is_empty() {
        return VOLUME_PAGES.find(line).map(|m| m.as_str());
    }

    candidates
        .iter()
        .find(|run| !is_year_like(run.as_str()))
        .or_else(|| candidates.first())
        .map(|run| run.as_str())
}

fn is_year_like(run: &str) -> bool {
    let digits: String = run.chars().take_while(char::is_ascii_digit).collect();
    digits.len() == 4
        && digits
            .parse::<u16>()
            .is_ok_and(|year| (1800..=2099).contains(&year))
}
