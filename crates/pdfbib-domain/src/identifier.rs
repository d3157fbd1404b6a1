//! Article identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an [`Identifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Digital Object Identifier
    Doi,
    /// arXiv preprint identifier (old or new format)
    Preprint,
    /// NASA ADS bibcode
    Bibcode,
}

impl IdentifierKind {
    /// Short lower-case tag, as used in logs and query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doi => "doi",
            Self::Preprint => "arxiv",
            Self::Bibcode => "bibcode",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identifier derived from the text of an article.
///
/// Exactly one kind is active; the kind decides how the identifier is turned
/// into an ADS query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Identifier {
    Doi(String),
    Preprint(String),
    Bibcode(String),
}

impl Identifier {
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Doi(_) => IdentifierKind::Doi,
            Self::Preprint(_) => IdentifierKind::Preprint,
            Self::Bibcode(_) => IdentifierKind::Bibcode,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Doi(v) | Self::Preprint(v) | Self::Bibcode(v) => v,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_value() {
        let id = Identifier::Doi("10.1086/123456".to_string());
        assert_eq!(id.kind(), IdentifierKind::Doi);
        assert_eq!(id.value(), "10.1086/123456");

        let id = Identifier::Preprint("1201.4773".to_string());
        assert_eq!(id.kind(), IdentifierKind::Preprint);
        assert_eq!(id.to_string(), "arxiv:1201.4773");
    }

    #[test]
    fn test_serde_shape() {
        let id = Identifier::Bibcode("1998apj...495.1234.".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#"{"kind":"bibcode","value":"1998apj...495.1234."}"#);
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
