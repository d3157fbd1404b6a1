//! Identifier extraction from article text

use lazy_static::lazy_static;
use pdfbib_domain::Identifier;
use regex::Regex;
use tracing::debug;

use crate::error::IdentifierError;
use crate::resolver::BibcodeResolver;

lazy_static! {
    // DOI: 2 digits, '.', 4 digits, '/', then the shortest run up to a
    // space, a parenthesis or the end of the line
    static ref DOI_REGEX: Regex =
        Regex::new(r"(?P<doi>[0-9]{2}\.[0-9]{4}/.*?)(?:[\s()]|$)").unwrap();

    // Bibcode printed on its own line, e.g. 2009apj...695.1394s
    static ref BIBCODE_LINE_REGEX: Regex =
        Regex::new(r"^[0-9]{4}[a-z&]{2,6}.*[0-9]{1,4}[a-z]?.*[0-9]{1,4}[a-z]$").unwrap();
}

/// Prefix marking a preprint id on the first word of a line
const PREPRINT_PREFIX: &str = "arxiv";

/// Line matchers, in the order they are tried on each line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Doi,
    Preprint,
    Bibcode,
}

impl Matcher {
    /// Each line tries every matcher in this order. A line the preprint
    /// matcher rejects (`(arxiv)`, `see arxiv:...`) is still offered to the
    /// bibcode matcher rather than skipped.
    pub const PRIORITY: [Matcher; 3] = [Matcher::Doi, Matcher::Preprint, Matcher::Bibcode];

    /// Try this matcher on a lower-cased line
    pub fn apply(self, line: &str) -> Option<Identifier> {
        match self {
            Matcher::Doi => match_doi(line).map(Identifier::Doi),
            Matcher::Preprint => match_preprint(line).map(Identifier::Preprint),
            Matcher::Bibcode => match_bibcode_line(line).map(Identifier::Bibcode),
        }
    }
}

/// Finds the identifier of an article from the text of its first page
#[derive(Debug, Clone, Default)]
pub struct IdentifierExtractor {
    resolver: BibcodeResolver,
}

impl IdentifierExtractor {
    pub fn new(resolver: BibcodeResolver) -> Self {
        Self { resolver }
    }

    /// Identifier for the text, falling back to a bibcode built from a
    /// journal reference line
    pub fn extract<S: AsRef<str>>(&self, lines: &[S]) -> Result<Identifier, IdentifierError> {
        if let Some(identifier) = self.find_explicit(lines) {
            return Ok(identifier);
        }
        let bibcode = self.resolver.resolve(lines)?;
        Ok(Identifier::Bibcode(bibcode.to_string()))
    }

    /// First identifier printed literally in the text
    pub fn find_explicit<S: AsRef<str>>(&self, lines: &[S]) -> Option<Identifier> {
        lines.iter().find_map(|line| {
            let line = line.as_ref().to_lowercase();
            Matcher::PRIORITY.iter().find_map(|matcher| {
                let found = matcher.apply(&line)?;
                debug!(?matcher, identifier = %found, "identifier matched");
                Some(found)
            })
        })
    }
}

fn match_doi(line: &str) -> Option<String> {
    DOI_REGEX
        .captures(line)
        .and_then(|cap| cap.name("doi"))
        .map(|m| m.as_str().to_string())
}

fn match_preprint(line: &str) -> Option<String> {
    let start = line.find(PREPRINT_PREFIX)?;
    if line[start + PREPRINT_PREFIX.len()..].starts_with(')') {
        return None;
    }

    let word = line.split_whitespace().next()?;
    if !word.starts_with(PREPRINT_PREFIX) {
        return None;
    }

    // Skip "arxiv:"
    let mut id = word.get(PREPRINT_PREFIX.len() + 1..)?;
    let mut tail = id.chars().rev();
    if let (Some(last), Some('v')) = (tail.next(), tail.next()) {
        if last.is_ascii_digit() {
            id = &id[..id.len() - 2];
        }
    }

    (!id.is_empty()).then(|| id.to_string())
}

fn match_bibcode_line(line: &str) -> Option<String> {
    let line = line.trim_end();
    BIBCODE_LINE_REGEX
        .is_match(line)
        .then(|| line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journals::JournalTable;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("doi: 10.1086/123456 (2020)", "10.1086/123456")]
    #[case("10.1093/mnras/stt1234", "10.1093/mnras/stt1234")]
    #[case("see doi:10.1051/0004-6361/200912345)", "10.1051/0004-6361/200912345")]
    fn test_doi(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(match_doi(line).as_deref(), Some(expected));
    }

    #[rstest]
    #[case("arxiv:1201.4773v1 [astro-ph.co] 21 jan 2012", Some("1201.4773"))]
    #[case("arxiv:astro-ph/0601001v2  3 jan 2006", Some("astro-ph/0601001"))]
    #[case("arxiv:1201.4773", Some("1201.4773"))]
    #[case("(arxiv) preprint", None)]
    #[case("see arxiv:1201.4773", None)]
    #[case("arxiv", None)]
    #[case("arxiv:", None)]
    fn test_preprint(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(match_preprint(line).as_deref(), expected);
    }

    #[rstest]
    #[case("2009apj...695.1394s", true)]
    #[case("2009apj...695.1394s   ", true)]
    #[case("1998a&a...330..123b", true)]
    #[case("the 2009 apj paper", false)]
    fn test_bibcode_line(#[case] line: &str, #[case] matches: bool) {
        assert_eq!(match_bibcode_line(line).is_some(), matches);
    }

    #[test]
    fn test_first_line_with_identifier_wins() {
        let lines = ["arXiv:1201.4773v1 [astro-ph.CO]", "DOI 10.1086/123456 (2020)"];
        let extractor = IdentifierExtractor::default();
        assert_eq!(
            extractor.extract(&lines).unwrap(),
            Identifier::Preprint("1201.4773".to_string())
        );
        assert_eq!(
            extractor.extract(&lines[1..]).unwrap(),
            Identifier::Doi("10.1086/123456".to_string())
        );
    }

    #[test]
    fn test_rejected_preprint_falls_through() {
        let extractor = IdentifierExtractor::default();
        assert!(extractor.find_explicit(&["see (arxiv) for details"]).is_none());

        // "arxiv" occurs, but not as the first word
        let lines = ["2009arxiv...695.1394s"];
        assert_eq!(
            extractor.find_explicit(&lines),
            Some(Identifier::Bibcode("2009arxiv...695.1394s".to_string()))
        );
    }

    #[test]
    fn test_falls_back_to_resolver() {
        let resolver = BibcodeResolver::new(JournalTable::builtin().with_extra([("apj", "apj")]));
        let extractor = IdentifierExtractor::new(resolver);
        let lines = ["A Study of Things", "...apj...1998, 495, 1234"];
        assert_eq!(
            extractor.extract(&lines).unwrap(),
            Identifier::Bibcode("1998apj...495.1234.".to_string())
        );
    }

    #[test]
    fn test_not_found() {
        let lines = ["Nothing to see here", ""];
        assert_eq!(
            IdentifierExtractor::default().extract(&lines),
            Err(IdentifierError::NotFound)
        );
    }

    proptest! {
        #[test]
        fn prop_doi_lines_yield_exact_doi(
            prefix in "[0-9]{2}\\.[0-9]{4}",
            suffix in "[a-z0-9./-]{1,20}",
            trailer in "( \\(2020\\)| |)",
        ) {
            let doi = format!("{}/{}", prefix, suffix);
            let lines = [format!("doi {}{}", doi, trailer)];
            prop_assert_eq!(
                IdentifierExtractor::default().extract(&lines).unwrap(),
                Identifier::Doi(doi)
            );
        }
    }
}
