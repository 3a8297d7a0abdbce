//! User-facing validation messages.
//!
//! The sign-up and sign-in pages render these strings verbatim, and page
//! objects compare them with exact equality. Do not rephrase.

pub const EMAIL_REQUIRED: &str = "Email is required";

pub const EMAIL_INVALID: &str = "Please enter a valid email address";

pub const PHONE_REQUIRED: &str = "Phone number is required";

pub const PHONE_INVALID: &str = "Please enter a valid phone number";

pub const PASSWORD_REQUIRED: &str = "Password is required";

pub const PASSWORD_NEEDS_LETTERS: &str = "Password must include letters";

pub const PASSWORD_NEEDS_NUMBERS: &str = "Password must include numbers";

pub const PASSWORD_NEEDS_SPECIAL: &str = "Password must include a special character";

/// Message for a password shorter than `min_length` characters
pub fn password_too_short(min_length: usize) -> String {
    format!("Password must be at least {} characters", min_length)
}
