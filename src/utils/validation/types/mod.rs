//! Type definitions for the validation system

mod email_input;
mod phone_input;

use thiserror::Error;

use crate::utils::error_messages::{EMAIL_INVALID, EMAIL_REQUIRED, PHONE_INVALID, PHONE_REQUIRED};

// Re-export commonly used types and functions
pub use email_input::EmailInput;
pub use phone_input::PhoneNumber;

/// Why a typed input could not be built. Messages match the form errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("{}", EMAIL_REQUIRED)]
    MissingEmail,
    #[error("{}", EMAIL_INVALID)]
    Email,
    #[error("{}", PHONE_REQUIRED)]
    MissingPhone,
    #[error("{}", PHONE_INVALID)]
    Phone,
}
