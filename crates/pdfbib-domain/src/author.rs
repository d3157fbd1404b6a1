//! Author representation

use serde::{Deserialize, Serialize};

/// Marker ADS uses for truncated author lists
pub const ET_AL: &str = "et al.";

/// An author as ADS records it: a family name and a list of initials.
///
/// The family name is already LaTeX-normalized. Units that could not be
/// split (such as the et-al marker) keep their literal text as the family
/// name and carry no initials.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AuthorName {
    pub family: String,
    pub initials: Vec<String>,
}

impl AuthorName {
    /// Create a new author with just a family name
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            initials: Vec::new(),
        }
    }

    /// Builder method to append an initial
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initials.push(initial.into());
        self
    }

    /// Builder method to set all initials at once
    pub fn with_initials<I, S>(mut self, initials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initials = initials.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_et_al(&self) -> bool {
        self.initials.is_empty() && self.family.eq_ignore_ascii_case(ET_AL)
    }

    /// Format as ADS BibTeX: `{Family}, I.~J.`
    pub fn to_bibtex_format(&self) -> String {
        let mut out = format!("{{{}}}", self.family);
        if !self.initials.is_empty() {
            out.push_str(", ");
            let initials: Vec<String> = self.initials.iter().map(|i| format!("{}.", i)).collect();
            out.push_str(&initials.join("~"));
        }
        out
    }

    /// Format as "I. J. Family" for display
    pub fn display_name(&self) -> String {
        if self.initials.is_empty() {
            return self.family.clone();
        }
        let mut name: String = self.initials.iter().map(|i| format!("{}. ", i)).collect();
        name.push_str(&self.family);
        name
    }
}
