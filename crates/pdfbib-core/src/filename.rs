//! PDF file names for imported articles

use lazy_static::lazy_static;
use pdfbib_bibtex::{normalize_latex, CitationRecord};
use regex::Regex;

lazy_static! {
    /// Characters that are not safe in a file name on common platforms
    static ref UNSAFE_CHARACTERS: Regex = Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).unwrap();
}

const PART_SEPARATOR: &str = " - ";

/// `"<first author family> - <reference> - <title>.pdf"`, leaving out
/// missing parts
pub fn article_file_name(record: &CitationRecord) -> String {
    let author = record
        .first_author()
        .map(|author| normalize_latex(&author.family))
        .unwrap_or_default();
    let title = record.title().map(normalize_latex).unwrap_or_default();

    let name = [author.as_str(), record.reference(), title.as_str()]
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR);
    let name = UNSAFE_CHARACTERS.replace_all(&name, "");
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");

    format!("{}.pdf", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfbib_domain::AuthorName;

    #[test]
    fn test_article_file_name() {
        let record = CitationRecord::builder()
            .entry_type("article")
            .reference("2012MNRAS.421.1183I")
            .author(AuthorName::new("Ivezić").with_initial("Z"))
            .field("title", "H$_{2}$ in {Dusty} Galaxies: a/b?")
            .build()
            .unwrap();
        assert_eq!(
            article_file_name(&record),
            "Ivezić - 2012MNRAS.421.1183I - H2 in Dusty Galaxies ab.pdf"
        );
    }

    #[test]
    fn test_missing_parts() {
        let record = CitationRecord::builder()
            .entry_type("misc")
            .reference("2020arXiv200101234X")
            .build()
            .unwrap();
        assert_eq!(article_file_name(&record), "2020arXiv200101234X.pdf");
    }
}
