//! Represents a validated email address.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::InvalidInput;
use crate::utils::validation::is_valid_email;

/// An email address that passed the coarse shape check.
///
/// Surrounding whitespace is removed and the address is lower-cased, so two
/// inputs differing only in case compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailInput(String);

impl EmailInput {
    pub fn new(email: &str) -> Result<Self, InvalidInput> {
        let trimmed = email.trim();

        if trimmed.is_empty() {
            return Err(InvalidInput::MissingEmail);
        }

        if !is_valid_email(trimmed) {
            return Err(InvalidInput::Email);
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part after the `@`
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, domain)| domain).unwrap_or_default()
    }
}

impl TryFrom<&str> for EmailInput {
    type Error = InvalidInput;

    fn try_from(email: &str) -> Result<Self, Self::Error> {
        Self::new(email)
    }
}

impl TryFrom<String> for EmailInput {
    type Error = InvalidInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        Self::new(&email)
    }
}

impl From<EmailInput> for String {
    fn from(email: EmailInput) -> Self {
        email.0
    }
}

impl AsRef<str> for EmailInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "user@example.com",
            "USER@EXAMPLE.COM",       // Should be normalized to lowercase
            "   user@example.com   ", // Should be trimmed
        ];

        for email in valid_emails {
            assert!(EmailInput::new(email).is_ok(), "Should accept valid email: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let test_cases = vec![
            ("", InvalidInput::MissingEmail),
            ("   ", InvalidInput::MissingEmail),
            ("user@domain", InvalidInput::Email),
            ("@example.com", InvalidInput::Email),
        ];

        for (email, expected) in test_cases {
            assert_eq!(EmailInput::new(email), Err(expected), "for {:?}", email);
        }
    }

    #[test]
    fn test_email_normalization() {
        let email = EmailInput::try_from("   USER@Example.COM   ").unwrap();

        assert_eq!(email.as_str(), "user@example.com");
        assert_eq!(email.domain(), "example.com");
        assert_eq!(email, EmailInput::new("user@example.com").unwrap());
    }

    #[test]
    fn test_error_message_matches_form() {
        assert_eq!(
            EmailInput::new("nope").unwrap_err().to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_serde_validates() {
        let email: EmailInput = serde_json::from_str(r#""A@B.co""#).unwrap();
        assert_eq!(email.to_string(), "a@b.co");
        assert_eq!(serde_json::to_string(&email).unwrap(), r#""a@b.co""#);

        assert!(serde_json::from_str::<EmailInput>(r#""not an email""#).is_err());
    }
}
