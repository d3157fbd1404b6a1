//! End-to-end pipeline tests over saved article text and ADS responses

mod common;

use common::fixtures::{load_response_fixture, load_text_fixture};
use pdfbib_core::{
    article_file_name, Identifier, IdentifierKind, PdfbibConfig, PdfbibError, Pipeline,
};
use pdfbib_identifiers::IdentifierError;
use rstest::rstest;

const QUERY_PREFIX: &str = "http://esoads.eso.org/cgi-bin/nph-bib_query?&";
const QUERY_SUFFIX: &str = "&data_type=BIBTEX&db_key=AST&nocookieset=1";

// === Identification ===

#[rstest]
#[case("doi_article.txt", IdentifierKind::Doi, "10.1111/j.1365-2966.2011.20364.x")]
#[case("arxiv_preprint.txt", IdentifierKind::Preprint, "1201.4773")]
#[case("old_preprint.txt", IdentifierKind::Preprint, "astro-ph/0601001")]
#[case("journal_reference.txt", IdentifierKind::Bibcode, "1998apj...495.1234.")]
fn test_identify(#[case] fixture: &str, #[case] kind: IdentifierKind, #[case] value: &str) {
    let identifier = Pipeline::default()
        .identify(&load_text_fixture(fixture))
        .unwrap();
    assert_eq!(identifier.kind(), kind);
    assert_eq!(identifier.value(), value);
}

#[test]
fn test_identify_nothing() {
    let err = Pipeline::default()
        .identify(&load_text_fixture("no_identifier.txt"))
        .unwrap_err();
    assert!(matches!(
        err,
        PdfbibError::Identifier(IdentifierError::NotFound)
    ));
}

// === Query URLs ===

#[rstest]
#[case("doi_article.txt", "doi=10.1111/j.1365-2966.2011.20364.x")]
#[case("arxiv_preprint.txt", "bibcode=2012arxiv1201.4773")]
#[case("old_preprint.txt", "bibcode=2006astro.ph..1001")]
#[case("journal_reference.txt", "bibcode=1998apj...495.1234.")]
fn test_lookup_url(#[case] fixture: &str, #[case] query: &str) {
    let lookup = Pipeline::default()
        .lookup_url(&load_text_fixture(fixture))
        .unwrap();
    assert_eq!(lookup.url, format!("{}{}{}", QUERY_PREFIX, query, QUERY_SUFFIX));
}

#[test]
fn test_doi_example_url() {
    let lookup = Pipeline::default()
        .lookup_url(&["10.1086/123456 (2020)"])
        .unwrap();
    assert_eq!(lookup.identifier, Identifier::Doi("10.1086/123456".to_string()));
    assert!(lookup.url.contains("&doi=10.1086/123456&"));
}

#[test]
fn test_configured_mirror_and_journal() {
    let config = PdfbibConfig::from_toml(
        r#"
[mirror]
host = "adsabs.harvard.edu"

[[journals.extra]]
name = "apj"
code = "apj"
"#,
    )
    .unwrap();
    let lookup = Pipeline::new(config)
        .lookup_url(&["...apj...1998, 495, 1234"])
        .unwrap();
    assert_eq!(
        lookup.identifier,
        Identifier::Bibcode("1998apj...495.1234.".to_string())
    );
    assert!(lookup
        .url
        .starts_with("http://adsabs.harvard.edu/cgi-bin/nph-bib_query?&bibcode=1998apj...495.1234.&"));
}

// === Record import ===

#[test]
fn test_import_response() {
    let record = Pipeline::default()
        .import_response(&load_response_fixture("mnras_record.txt"))
        .unwrap();

    assert_eq!(record.entry_type(), "article");
    assert_eq!(record.reference(), "2012MNRAS.421.1183I");
    assert_eq!(record.journal(), Some("MNRAS"));
    assert_eq!(record.year(), Some("2012"));
    assert_eq!(record.doi(), Some("10.1111/j.1365-2966.2011.20364.x"));
    assert_eq!(record.get_field("archivePrefix"), Some("arXiv"));
    assert_eq!(
        record.get_field("adsurl"),
        Some("http://adsabs.harvard.edu/abs/2012MNRAS.421.1183I")
    );
    assert_eq!(record.get_field("url"), record.get_field("adsurl"));
    assert_eq!(
        record.get_field("adsnote"),
        Some("Provided by the SAO/NASA Astrophysics Data System")
    );

    let authors = record.authors();
    assert_eq!(authors.len(), 5);
    assert_eq!(authors[0].family, "Ivison");
    assert_eq!(authors[0].initials, vec!["R", "J"]);
    assert_eq!(authors[4].family, "De Breuck");
    assert_eq!(authors[4].initials, vec!["C"]);
}

#[test]
fn test_imported_file_name() {
    let record = Pipeline::default()
        .import_response(&load_response_fixture("mnras_record.txt"))
        .unwrap();
    let name = article_file_name(&record);
    assert!(name.starts_with("Ivison - 2012MNRAS.421.1183I - Gas, dust and stars"));
    assert!(name.ends_with("J02399-0136.pdf"));
}

#[test]
fn test_import_empty_response() {
    let err = Pipeline::default()
        .import_response("Query Results from the ADS Database\n\nRetrieved 0 abstracts\n")
        .unwrap_err();
    assert!(matches!(err, PdfbibError::EmptyResponse));
}
