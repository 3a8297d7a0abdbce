//! Represents a validated phone number.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::InvalidInput;
use crate::utils::validation::{is_valid_phone, strip_country_code, COUNTRY_CODE};

/// A phone number stored as its nine digit local subscriber part.
///
/// Construction accepts the local form (`501234567`) as well as the
/// international one (`+966501234567`, `00966501234567`, `966501234567`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(phone: &str) -> Result<Self, InvalidInput> {
        if phone.trim().is_empty() {
            return Err(InvalidInput::MissingPhone);
        }

        let local = strip_country_code(phone);
        if !is_valid_phone(local) {
            return Err(InvalidInput::Phone);
        }

        Ok(Self(local.to_owned()))
    }

    /// The local subscriber number, as the validators expect it
    pub fn local(&self) -> &str {
        &self.0
    }

    /// The number with its country code
    pub fn international(&self) -> String {
        format!("{}{}", COUNTRY_CODE, self.0)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = InvalidInput;

    fn try_from(phone: &str) -> Result<Self, Self::Error> {
        Self::new(phone)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = InvalidInput;

    fn try_from(phone: String) -> Result<Self, Self::Error> {
        Self::new(&phone)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_and_international_forms_agree() {
        let forms = vec![
            "501234567",
            "+966501234567",
            "00966501234567",
            "966501234567",
            " +966 501234567",
        ];

        for phone in forms {
            let parsed = PhoneNumber::try_from(phone).unwrap();
            assert_eq!(parsed.local(), "501234567", "for {:?}", phone);
            assert_eq!(parsed.international(), "+966501234567");
        }
    }

    #[test]
    fn test_invalid_phones() {
        let test_cases = vec![
            ("", InvalidInput::MissingPhone),
            ("  ", InvalidInput::MissingPhone),
            ("50123456", InvalidInput::Phone),
            ("501-234-567", InvalidInput::Phone),
            ("+9665012345678", InvalidInput::Phone),
            ("+33612345678", InvalidInput::Phone),
        ];

        for (phone, expected) in test_cases {
            assert_eq!(PhoneNumber::new(phone), Err(expected), "for {:?}", phone);
        }
    }

    #[test]
    fn test_display_and_asref() {
        let phone = PhoneNumber::new("+966501234567").unwrap();

        assert_eq!(format!("{}", phone), "501234567");
        let reference: &str = phone.as_ref();
        assert_eq!(reference, "501234567");
    }
}
