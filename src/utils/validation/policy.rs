//! Password acceptability rules

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use super::constants::{MIN_PASSWORD_LENGTH, SPECIAL_CHARS};

/// Policy used by the free validation functions and generators
pub static DEFAULT_POLICY: Lazy<PasswordPolicy> = Lazy::new(PasswordPolicy::default);

/// The set of rules a password must satisfy.
///
/// A policy is built once (defaults or configuration file) and then only
/// read. An empty `special_chars` set disables the special character rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_letter: bool,
    pub require_digit: bool,
    pub special_chars: BTreeSet<char>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            require_letter: true,
            require_digit: true,
            special_chars: SPECIAL_CHARS.iter().copied().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("minimum password length must be at least 1")]
    ZeroLength,
    #[error("special character {0:?} is not ASCII punctuation")]
    InvalidSpecialChar(char),
}

impl PasswordPolicy {
    pub fn requires_special(&self) -> bool {
        !self.special_chars.is_empty()
    }

    /// Rejects policies that could never be reported or satisfied sensibly
    pub fn check(&self) -> Result<(), PolicyError> {
        if self.min_length == 0 {
            return Err(PolicyError::ZeroLength);
        }

        if let Some(c) = self
            .special_chars
            .iter()
            .find(|c| !c.is_ascii_punctuation())
        {
            return Err(PolicyError::InvalidSpecialChar(*c));
        }

        Ok(())
    }

    pub(crate) fn is_special(&self, c: char) -> bool {
        self.special_chars.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PasswordPolicy::default();

        assert_eq!(policy.min_length, 9);
        assert!(policy.require_letter);
        assert!(policy.require_digit);
        assert_eq!(policy.special_chars.len(), 10);
        for c in "#?!@$%^&*-".chars() {
            assert!(policy.is_special(c), "{} should be special", c);
        }
        assert!(!policy.is_special('_'));
        assert_eq!(policy.check(), Ok(()));
    }

    #[test]
    fn test_policy_check() {
        let zero = PasswordPolicy {
            min_length: 0,
            ..PasswordPolicy::default()
        };
        assert_eq!(zero.check(), Err(PolicyError::ZeroLength));

        let mut letters = PasswordPolicy::default();
        letters.special_chars.insert('x');
        assert_eq!(letters.check(), Err(PolicyError::InvalidSpecialChar('x')));

        let no_special = PasswordPolicy {
            special_chars: BTreeSet::new(),
            ..PasswordPolicy::default()
        };
        assert!(!no_special.requires_special());
        assert_eq!(no_special.check(), Ok(()));
    }

    #[test]
    fn test_partial_policy_from_yaml() {
        let policy: PasswordPolicy = serde_yaml::from_str("min_length: 12\n").unwrap();

        assert_eq!(policy.min_length, 12);
        assert_eq!(policy.special_chars, PasswordPolicy::default().special_chars);
    }
}
