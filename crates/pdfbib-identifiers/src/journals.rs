//! Journal name variants and their ADS codes

use serde::{Deserialize, Serialize};

/// Built-in variants, in preference order (later entries win)
static BUILTIN_JOURNALS: &[(&str, &str)] = &[
    ("a&a", "aap"),
    ("the astronomical journal", "aj"),
    ("the astrophysical journal", "apj"),
    ("the astrophysical journal supplement", "apjs"),
    ("annu. rev. astron. astrophys.", "ara&a"),
    ("annu. rev. astro. astrophys.", "ara&a"),
    ("mon. not. r. astron. soc.", "mnras"),
    ("pasj", "pasj"),
    ("res. astron. astrophys.", "raa"),
    ("research in astron. astrophys.", "raa"),
];

/// A lower-case journal name variant and the code it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub variant: String,
    pub code: String,
}

/// Ordered table of journal name variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalTable {
    entries: Vec<JournalEntry>,
}

impl Default for JournalTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl JournalTable {
    /// The built-in astronomy journals
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_JOURNALS
                .iter()
                .map(|(variant, code)| JournalEntry {
                    variant: variant.to_string(),
                    code: code.to_string(),
                })
                .collect(),
        }
    }

    /// Append variants after the existing ones, so they take precedence
    pub fn with_extra<I, V, C>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (V, C)>,
        V: Into<String>,
        C: Into<String>,
    {
        self.entries.extend(extra.into_iter().map(|(variant, code)| JournalEntry {
            variant: variant.into().to_lowercase(),
            code: code.into(),
        }));
        self
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// The entry for a lower-cased line.
    ///
    /// When several variants occur in the line the **last** one in table
    /// order wins. `"the astrophysical journal supplement"` follows
    /// `"the astrophysical journal"` for this reason.
    pub fn best_match(&self, line: &str) -> Option<&JournalEntry> {
        self.entries
            .iter()
            .rev()
            .find(|entry| line.contains(entry.variant.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("the astrophysical journal, 495:1234", "apj")]
    #[case("the astrophysical journal supplement series, 180:1", "apjs")]
    #[case("mon. not. r. astron. soc. 400, 1 (2009)", "mnras")]
    #[case("a&a 500, 1 (2009)", "aap")]
    #[case("research in astron. astrophys. 2012", "raa")]
    fn test_best_match(#[case] line: &str, #[case] code: &str) {
        let table = JournalTable::builtin();
        assert_eq!(table.best_match(line).unwrap().code, code);
    }

    #[test]
    fn test_no_match() {
        assert!(JournalTable::builtin().best_match("nature 2009").is_none());
    }

    #[test]
    fn test_extra_variants_take_precedence() {
        let table = JournalTable::builtin().with_extra([("PASJ Letters", "pasjl")]);
        assert_eq!(table.entries().len(), BUILTIN_JOURNALS.len() + 1);
        assert_eq!(table.best_match("pasj letters 60, 1").unwrap().code, "pasjl");
        assert_eq!(table.best_match("pasj 60, 1").unwrap().code, "pasj");
    }
}
