//! Sign-up / sign-in form validation and synthetic fixtures.
//!
//! Every check is a pure function: invalid input yields a
//! [`ValidationResult`] carrying the user-facing messages, never an error.

pub mod api_checks;
pub mod config;
pub mod fixtures;
pub mod models;
pub mod utils;

pub use fixtures::{
    generate_random_email, generate_random_international_phone, generate_random_phone,
    generate_valid_password,
};
pub use models::{FormData, FormMode, ValidationResult};
pub use utils::validation::{
    is_valid_email, is_valid_phone, strip_country_code, validate_form, validate_password,
    EmailInput, InvalidInput, PasswordPolicy, PhoneNumber,
};
