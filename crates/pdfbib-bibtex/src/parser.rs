//! Line-oriented record parser
//!
//! A record block is read one line at a time:
//! - the first line starting with `@` is the header (`@type{reference,`)
//! - a `key = value` line opens a new field
//! - any other line continues the most recent field
//!
//! Whatever follows the header on its own line is read as an ordinary line.
//! The record's closing brace ends up in the last field and is removed once
//! all lines are in.

use nom::{
    bytes::complete::{take_till, take_while1},
    character::complete::{char, multispace0, space0},
    IResult,
};
use tracing::debug;

use crate::author::parse_author_list;
use crate::braces::is_wrapped;
use crate::error::BibtexError;
use crate::record::{CitationRecord, CitationRecordBuilder};

/// Parse the lines of one record block
pub fn parse_entry<S: AsRef<str>>(lines: &[S]) -> Result<CitationRecord, BibtexError> {
    let mut builder = CitationRecordBuilder::new();
    let mut has_header = false;
    let mut fields: Vec<(String, String)> = Vec::new();

    for line in lines {
        let mut line = line.as_ref();

        if !has_header {
            let Ok((rest, (entry_type, reference))) = header(line) else {
                continue;
            };
            debug!(entry_type, reference, "record header");
            builder.entry_type(entry_type).reference(reference);
            has_header = true;
            line = rest;
        }

        if line.trim().is_empty() {
            continue;
        }

        if let Ok((rest, key)) = field_start(line) {
            debug!(key, "field");
            fields.push((key.to_string(), join_tokens(rest)));
        } else if let Some((_, value)) = fields.last_mut() {
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(&join_tokens(line));
        }
    }

    if !has_header {
        return Err(BibtexError::MalformedEntry(
            "no `@type{reference,` header line".to_string(),
        ));
    }

    if let Some((_, value)) = fields.last_mut() {
        if let Some(pos) = value.rfind('}') {
            value.remove(pos);
        }
    }

    for (key, raw) in fields {
        let value = clean_value(&raw);
        if key.eq_ignore_ascii_case("author") {
            builder.authors(parse_author_list(&value));
        } else {
            builder.field(key, value);
        }
    }

    builder.build()
}

/// Parse a record held in a single string
pub fn parse_entry_text(text: &str) -> Result<CitationRecord, BibtexError> {
    let lines: Vec<&str> = text.lines().collect();
    parse_entry(&lines)
}

/// Strip delimiters from a raw field value.
///
/// Trims, drops one trailing `,`, then unwraps `"..."` and `{...}` layers
/// until the value is no longer a single group.
pub fn clean_value(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut value = trimmed.strip_suffix(',').unwrap_or(trimmed).trim_end();

    loop {
        let quoted = value.len() >= 2 && value.starts_with('"') && value.ends_with('"');
        if !quoted && !is_wrapped(value) {
            break;
        }
        value = value[1..value.len() - 1].trim();
    }

    value.to_string()
}

/// Lower-case type of the record header on `line`, if `line` is a header
pub fn header_type(line: &str) -> Option<String> {
    entry_type(line)
        .ok()
        .map(|(_, entry_type)| entry_type.trim().to_lowercase())
}

fn entry_type(input: &str) -> IResult<&str, &str> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('@')(rest)?;
    take_till(|c: char| c == '{')(rest)
}

/// `@type{reference,`
fn header(input: &str) -> IResult<&str, (&str, &str)> {
    let (rest, entry_type) = entry_type(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, reference) = take_till(|c: char| c == ',')(rest)?;
    let (rest, _) = char(',')(rest)?;
    Ok((rest, (entry_type.trim(), reference.trim())))
}

/// `key =`, returning the key
fn field_start(input: &str) -> IResult<&str, &str> {
    let (rest, _) = multispace0(input)?;
    let (rest, key) = take_while1(is_key_char)(rest)?;
    let (rest, _) = space0(rest)?;
    let (rest, _) = char('=')(rest)?;
    Ok((rest, key))
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn join_tokens(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
