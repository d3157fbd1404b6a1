//! Record formatting
//!
//! Converts CitationRecord values back to ADS-style record text.

use crate::author::AUTHOR_SEPARATOR;
use crate::record::CitationRecord;

/// Format a single record
pub fn format_record(record: &CitationRecord) -> String {
    let mut result = String::new();

    result.push('@');
    result.push_str(record.entry_type());
    result.push('{');
    result.push_str(record.reference());
    result.push(',');
    result.push('\n');

    if !record.authors().is_empty() {
        let authors = record
            .authors()
            .iter()
            .map(|author| author.to_bibtex_format())
            .collect::<Vec<_>>()
            .join(AUTHOR_SEPARATOR);
        push_field(&mut result, "author", &format!("{{{}}}", authors));
    }

    for (key, value) in record.fields() {
        push_field(&mut result, key, &format_field_value(value));
    }

    result.push('}');
    result
}

/// Format several records, separated by a blank line
pub fn format_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a CitationRecord>,
{
    records
        .into_iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn push_field(result: &mut String, key: &str, value: &str) {
    result.push_str("    ");
    result.push_str(key);
    result.push_str(" = ");
    result.push_str(value);
    result.push(',');
    result.push('\n');
}

/// Numbers stay bare, everything else is braced
fn format_field_value(value: &str) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        return value.to_string();
    }

    let mut result = String::with_capacity(value.len() + 2);
    result.push('{');
    result.push_str(value);
    result.push('}');
    result
}
