//! Configuration for pdfbib
//!
//! Settings are read from a TOML file, by default
//! `<config_dir>/pdfbib/config.toml`. Every section is optional; missing
//! values take their defaults.

use std::path::{Path, PathBuf};

use pdfbib_identifiers::{JournalTable, QueryUrlBuilder, DEFAULT_CENTURY_CUTOFF, DEFAULT_MIRROR};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Host that replaces the mirror in stored ADS links
pub const CANONICAL_HOST: &str = "adsabs.harvard.edu";

/// Longest journal code that fits a bibcode
const MAX_JOURNAL_CODE_LEN: usize = 5;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfbibConfig {
    pub mirror: MirrorConfig,
    pub arxiv: ArxivConfig,
    pub journals: JournalsConfig,
}

/// ADS hosts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    /// Mirror queried for records
    pub host: String,
    /// Host written into `adsurl` and `url` of imported records
    pub canonical_host: String,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MIRROR.to_string(),
            canonical_host: CANONICAL_HOST.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArxivConfig {
    /// Two-digit preprint years above this are read as 19xx
    pub century_cutoff: u8,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            century_cutoff: DEFAULT_CENTURY_CUTOFF,
        }
    }
}

/// Journal variants added after the built-in table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalsConfig {
    pub extra: Vec<JournalVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalVariant {
    /// Lower-case name as printed in articles
    pub name: String,
    /// ADS journal code
    pub code: String,
}

impl PdfbibConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file path: `<config_dir>/pdfbib/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pdfbib").join("config.toml"))
    }

    /// Load and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, or the defaults when it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_host(&self.mirror.host)?;
        check_host(&self.mirror.canonical_host)?;

        if self.arxiv.century_cutoff >= 100 {
            return Err(ConfigError::OutOfRange(
                "century_cutoff must be a two-digit year".to_string(),
            ));
        }

        for journal in &self.journals.extra {
            if journal.name.trim().is_empty() || journal.name != journal.name.to_lowercase() {
                return Err(ConfigError::InvalidJournal(format!(
                    "name {:?} must be non-empty lower-case text",
                    journal.name
                )));
            }
            let code_ok = (1..=MAX_JOURNAL_CODE_LEN).contains(&journal.code.len())
                && journal.code.chars().all(|c| c.is_ascii_graphic() && c != '.');
            if !code_ok {
                return Err(ConfigError::InvalidJournal(format!(
                    "code {:?} must be 1 to {} characters without '.'",
                    journal.code, MAX_JOURNAL_CODE_LEN
                )));
            }
        }

        Ok(())
    }

    /// Built-in journal table plus the configured variants
    pub fn journal_table(&self) -> JournalTable {
        JournalTable::builtin().with_extra(
            self.journals
                .extra
                .iter()
                .map(|j| (j.name.clone(), j.code.clone())),
        )
    }

    pub fn query_builder(&self) -> QueryUrlBuilder {
        QueryUrlBuilder::new(self.mirror.host.clone(), self.arxiv.century_cutoff)
    }
}

/// A host must be usable as `http://<host>/` and nothing more
fn check_host(host: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidHost(host.to_string());
    let url = Url::parse(&format!("http://{}/", host)).map_err(|_| invalid())?;
    let bare = url.host_str().is_some()
        && url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
        && url.username().is_empty();
    if bare {
        Ok(())
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = PdfbibConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mirror.host, "esoads.eso.org");
        assert_eq!(config.arxiv.century_cutoff, 14);
    }

    #[test]
    fn test_partial_toml() {
        let config = PdfbibConfig::from_toml(
            r#"
[arxiv]
century_cutoff = 20

[[journals.extra]]
name = "publ. astron. soc. pac."
code = "pasp"
"#,
        )
        .unwrap();
        assert_eq!(config.arxiv.century_cutoff, 20);
        assert_eq!(config.mirror, MirrorConfig::default());
        assert_eq!(config.journals.extra.len(), 1);
        assert!(config.validate().is_ok());

        let table = config.journal_table();
        assert_eq!(
            table.best_match("publ. astron. soc. pac. 120, 1").unwrap().code,
            "pasp"
        );
    }

    #[test]
    fn test_toml_and_json_round_trip() {
        let mut config = PdfbibConfig::default();
        config.mirror.host = "adsabs.harvard.edu".to_string();
        let toml = config.to_toml().unwrap();
        assert_eq!(PdfbibConfig::from_toml(&toml).unwrap(), config);

        let json = config.to_json().unwrap();
        assert_eq!(PdfbibConfig::from_json(&json).unwrap(), config);
    }

    #[rstest]
    #[case("esoads.eso.org", true)]
    #[case("localhost:8080", true)]
    #[case("ads mirror", false)]
    #[case("esoads.eso.org/path", false)]
    #[case("user@esoads.eso.org", false)]
    #[case("", false)]
    fn test_check_host(#[case] host: &str, #[case] valid: bool) {
        assert_eq!(check_host(host).is_ok(), valid);
    }

    #[test]
    fn test_invalid_cutoff() {
        let mut config = PdfbibConfig::default();
        config.arxiv.century_cutoff = 100;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange(_))));
    }

    #[rstest]
    #[case("Upper Case", "uc")]
    #[case("", "x")]
    #[case("fine name", "")]
    #[case("fine name", "toolong")]
    #[case("fine name", "a.b")]
    fn test_invalid_journal(#[case] name: &str, #[case] code: &str) {
        let mut config = PdfbibConfig::default();
        config.journals.extra.push(JournalVariant {
            name: name.to_string(),
            code: code.to_string(),
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidJournal(_))
        ));
    }

    #[test]
    fn test_query_builder_uses_config() {
        let mut config = PdfbibConfig::default();
        config.arxiv.century_cutoff = 30;
        let builder = config.query_builder();
        assert_eq!(builder.mirror(), "esoads.eso.org");
        assert_eq!(builder.full_year(20), 2020);
    }
}
