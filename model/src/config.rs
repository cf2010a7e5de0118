//! Data factory configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! min_class_expressions = 2
//! intern = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors loading a [`FactoryConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The configuration is not valid TOML for this schema.
    #[error("failed to parse factory configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("invalid factory configuration: {0}")]
    Invalid(String),
}

/// Settings for a [`DataFactory`](crate::DataFactory).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryConfig {
    /// Minimum number of distinct class expressions in an n-ary class axiom.
    /// `1` admits degenerate single-expression axioms. The factory treats
    /// `0` as `1`; loading rejects it.
    pub min_class_expressions: usize,
    /// Share one allocation between axioms of equal content.
    pub intern: bool,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            min_class_expressions: 2,
            intern: true,
        }
    }
}

impl FactoryConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise as
    /// [`FactoryConfig::from_toml_str`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded factory configuration");
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `min_class_expressions` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_class_expressions == 0 {
            return Err(ConfigError::Invalid(
                "min_class_expressions must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = FactoryConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, FactoryConfig::default());
        assert_eq!(config.min_class_expressions, 2);
        assert!(config.intern);
    }

    #[test]
    fn reads_overrides() {
        let config = FactoryConfig::from_toml_str("min_class_expressions = 1\nintern = false\n")
            .expect("valid config");
        assert_eq!(config.min_class_expressions, 1);
        assert!(!config.intern);
    }

    #[test]
    fn rejects_zero_minimum() {
        let err = FactoryConfig::from_toml_str("min_class_expressions = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = FactoryConfig::from_toml_str("minimum = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = FactoryConfig::from_path(Path::new("/nonexistent/factory.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
