//! Journal macro formatting
//!
//! ADS records name the big journals with AASTeX macros (`\apj`). These are
//! mapped to the short printable names used in file names and listings.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Journal macros and their short printable names
    static ref MACROS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();

        m.insert("\\aap", "A\\&A");
        m.insert("\\aaps", "A\\&AS");
        m.insert("\\aj", "AJ");
        m.insert("\\apj", "ApJ");
        m.insert("\\apjl", "ApJL");
        m.insert("\\apjs", "ApJS");
        m.insert("\\araa", "ARA\\&A");
        m.insert("ArXiv e-prints", "arXiv");
        m.insert("\\mnras", "MNRAS");
        m.insert("\\nat", "Nature");
        m.insert("\\pasj", "PASJ");
        m.insert("\\pasp", "PASP");
        m.insert("\\physrep", "Phys. Rep.");

        m
    };
}

/// Short name for a journal macro; unknown values come back unchanged
pub fn format_journal(value: &str) -> String {
    MACROS
        .get(value.trim())
        .map(|name| name.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Check if a value is a known journal macro
pub fn is_journal_macro(value: &str) -> bool {
    MACROS.contains_key(value.trim())
}
