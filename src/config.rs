//! Startup configuration.
//!
//! The password policy may be overridden by a YAML file named in the
//! environment. It is read once, checked, and never changed afterwards.

use log::info;
use serde::Deserialize;
use std::{env, fs, io, path::Path};
use thiserror::Error;

use crate::utils::validation::{PasswordPolicy, PolicyError};

/// Environment variable naming the policy override file
pub const POLICY_FILE_VAR: &str = "AUTHFORMS_POLICY_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read policy file {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("Malformed policy file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid password policy: {0}")]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub policy: PasswordPolicy,
}

impl Settings {
    /// Loads the file named by [`POLICY_FILE_VAR`], or the defaults when the
    /// variable is not set
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(POLICY_FILE_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()),
            _ => {
                info!("{} not set, using the default password policy", POLICY_FILE_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let settings = Self::from_yaml(&content)?;
        info!("Password policy loaded from {}", path.display());
        Ok(settings)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_yaml::from_str(content)?;
        settings.policy.check()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_empty_document_gives_defaults() {
        let settings = Settings::from_yaml("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_policy_override() {
        let yaml = "policy:\n  min_length: 12\n  special_chars: ['!', '?']\n";
        let settings = Settings::from_yaml(yaml).unwrap();

        assert_eq!(settings.policy.min_length, 12);
        assert!(settings.policy.require_digit);
        assert_eq!(
            settings.policy.special_chars,
            ['!', '?'].into_iter().collect::<BTreeSet<char>>()
        );
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let zero = Settings::from_yaml("policy:\n  min_length: 0\n");
        assert!(matches!(zero, Err(ConfigError::Policy(PolicyError::ZeroLength))));

        let letter = Settings::from_yaml("policy:\n  special_chars: ['a']\n");
        assert!(matches!(
            letter,
            Err(ConfigError::Policy(PolicyError::InvalidSpecialChar('a')))
        ));

        assert!(matches!(
            Settings::from_yaml("policy: nope"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::from_file("/nonexistent/authforms-policy.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
