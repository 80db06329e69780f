//! YAML configuration for gazetteer matchers.
//!
//! A [`GazetteerConfig`] names a gazetteer, fixes how its elements are
//! normalized and sets the default scan policy. Entries themselves are added
//! in code; the file only describes how the matcher behaves.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "cities"
//!
//! normalize:
//!   version: 1
//!   lowercase: true
//!   normalize_unicode: true
//!   ignore_whitespace: false
//!   ignore_punctuation: true
//!
//! find:
//!   all: false
//!   skip: true
//!   from: 0
//! ```

use std::fs;
use std::path::Path;

use matcher::{FindOptions, StringMatcher, TokenMatcher};
use normalize::NormalizeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for one gazetteer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GazetteerConfig {
    /// Configuration format version
    pub version: String,

    /// Optional gazetteer name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Ignore and fold rules applied to entries and scanned input
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// Default scan policy for `find`
    #[serde(default)]
    pub find: FindOptions,
}

impl GazetteerConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: GazetteerConfig = serde_yaml::from_str(yaml)?;
        match config.validate() {
            Ok(()) => {
                info!(
                    name = ?config.name,
                    version = %config.version,
                    identity = config.normalize.is_identity(),
                    "config_loaded"
                );
                Ok(config)
            }
            Err(err) => {
                warn!(name = ?config.name, error = %err, "config_invalid");
                Err(err)
            }
        }
    }

    /// Render the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.normalize
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("normalize: {err}")))?;

        if let (Some(from), Some(to)) = (self.find.from, self.find.to) {
            if from > to {
                return Err(ConfigLoadError::Validation(format!(
                    "find.from ({from}) must be <= find.to ({to})"
                )));
            }
        }
        Ok(())
    }

    /// An empty character-level matcher using this config's normalization.
    pub fn string_matcher<T>(&self) -> StringMatcher<T> {
        StringMatcher::new().with_normalize(&self.normalize)
    }

    /// An empty token-level matcher using this config's normalization.
    pub fn token_matcher<T>(&self) -> TokenMatcher<T> {
        TokenMatcher::new().with_normalize(&self.normalize)
    }

    /// The configured default scan policy.
    pub fn find_options(&self) -> FindOptions {
        self.find
    }
}

impl Default for GazetteerConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            normalize: NormalizeConfig::default(),
            find: FindOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "cities"
normalize:
  lowercase: true
  ignore_punctuation: true
find:
  all: true
"#;

        let config = GazetteerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("cities".to_string()));
        assert!(config.normalize.lowercase);
        assert!(config.normalize.ignore_punctuation);
        assert!(!config.normalize.ignore_whitespace);
        assert_eq!(config.normalize.version, 1);
        assert!(config.find.all);
        assert!(config.find.skip);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
normalize:
  version: 1
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = GazetteerConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.find, FindOptions::default());
    }

    #[test]
    fn test_missing_file() {
        let result = GazetteerConfig::from_file("/nonexistent/gazetteer.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = GazetteerConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unsupported_version() {
        let result = GazetteerConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(ref v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_normalize_validation() {
        let yaml = r#"
version: "1.0"
normalize:
  version: 0
"#;

        let result = GazetteerConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("normalize"));
    }

    #[test]
    fn test_find_range_validation() {
        let yaml = r#"
version: "1.0"
find:
  from: 5
  to: 2
"#;

        let result = GazetteerConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigLoadError::Validation(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = GazetteerConfig::from_yaml("version: [unclosed");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = GazetteerConfig {
            name: Some("people".into()),
            normalize: NormalizeConfig::new().with_lowercase(true),
            find: FindOptions::new().with_all(true).with_to(10),
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(GazetteerConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_builds_configured_matchers() {
        let config = GazetteerConfig {
            normalize: NormalizeConfig::new().with_lowercase(true),
            ..Default::default()
        };

        let mut sm = config.string_matcher::<u8>();
        sm.add("Paris", Some(1), false);
        assert_eq!(sm.find("PARIS", &config.find_options()).len(), 1);

        let mut tm = config.token_matcher::<u8>();
        tm.add_text("Le Mans", Some(2), false);
        assert_eq!(tm.find(&["le", "MANS"], &config.find_options()).len(), 1);
    }
}
