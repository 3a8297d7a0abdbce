//! Constants used throughout the validation system

/// Minimum number of characters a password must have
pub const MIN_PASSWORD_LENGTH: usize = 9;

/// Characters accepted by the "special character" password rule
pub const SPECIAL_CHARS: &[char] = &['#', '?', '!', '@', '$', '%', '^', '&', '*', '-'];

/// Number of digits in a local subscriber phone number
pub const PHONE_DIGITS: usize = 9;

/// Country code callers strip before handing a phone number to the validators
pub const COUNTRY_CODE: &str = "+966";

/// Leading digit of generated mobile numbers
pub const MOBILE_PREFIX: char = '5';

/// Local part prefix of generated email addresses
pub const FIXTURE_EMAIL_PREFIX: &str = "testuser";

/// Domain of generated email addresses
pub const FIXTURE_EMAIL_DOMAIN: &str = "example.com";
