//! Author list parsing
//!
//! ADS writes authors as `{Family}, I.~J.` units joined by ` and `. Units
//! that do not follow that shape are kept as well as possible: a lone brace
//! group becomes a family name, anything else is normalized and kept whole.

use lazy_static::lazy_static;
use pdfbib_domain::AuthorName;
use regex::Regex;

use crate::braces::is_wrapped;
use crate::latex_decoder::normalize_latex;

lazy_static! {
    /// `{Family},initials`, greedy so the family runs to the last `},`
    static ref FAMILY_FIRST: Regex = Regex::new(r"^\{(?P<family>.+)\},(?P<initials>.*)$").unwrap();

    /// Accent commands that decorate an initial (`\v Z`, `\'E`, `\c{C}`)
    static ref ACCENT_COMMAND: Regex =
        Regex::new(r#"\\(?:[vcuHkdbtr](?:\s+|\{)|['"`^~=.])"#).unwrap();
}

/// Separator between author units
pub const AUTHOR_SEPARATOR: &str = " and ";

/// Split an author field into trimmed, non-empty units
pub fn split_authors(value: &str) -> Vec<&str> {
    value
        .split(AUTHOR_SEPARATOR)
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .collect()
}

/// Parse every unit of an author field.
///
/// Units whose text normalizes to nothing (`{}`, `$$`) are dropped.
pub fn parse_author_list(value: &str) -> Vec<AuthorName> {
    split_authors(value)
        .into_iter()
        .map(parse_author)
        .filter(|author| !author.family.is_empty())
        .collect()
}

/// Parse a single author unit.
///
/// Every branch normalizes the family name, so an author written back by
/// [`AuthorName::to_bibtex_format`] parses to the same value.
pub fn parse_author(unit: &str) -> AuthorName {
    let unit = unit.trim();

    if let Some(caps) = FAMILY_FIRST.captures(unit) {
        let family = normalize_family(&caps["family"]);
        if !family.is_empty() {
            let initials = caps["initials"]
                .split('.')
                .filter_map(clean_initial)
                .collect::<Vec<_>>();
            return AuthorName::new(family).with_initials(initials);
        }
    }

    if is_wrapped(unit) {
        return AuthorName::new(normalize_family(&unit[1..unit.len() - 1]));
    }

    AuthorName::new(normalize_family(unit))
}

/// LaTeX-normalized name with whitespace runs collapsed
fn normalize_family(text: &str) -> String {
    normalize_latex(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reduce one `.`-separated initials token to its bare letters
fn clean_initial(token: &str) -> Option<String> {
    let token = token.trim_matches(|c: char| c == '~' || c.is_whitespace());
    if token.is_empty() {
        return None;
    }
    let bare = normalize_latex(&ACCENT_COMMAND.replace_all(token, ""));
    let bare = bare.trim();
    (!bare.is_empty()).then(|| bare.to_string())
}
