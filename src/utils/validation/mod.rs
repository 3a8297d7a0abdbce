//! Root module for the validation system.
//! Exposes the public API for form validation.

mod constants;
mod policy;
mod types;
mod validators;

// Re-export commonly used types and functions
pub use constants::*;
pub use policy::{PasswordPolicy, PolicyError, DEFAULT_POLICY};
pub use types::{EmailInput, InvalidInput, PhoneNumber};
pub use validators::{
    is_valid_email, is_valid_phone, strip_country_code, validate_form, validate_password,
};
