//! Field checks and composite form validation

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::constants::{COUNTRY_CODE, PHONE_DIGITS};
use super::policy::{PasswordPolicy, DEFAULT_POLICY};
use crate::models::{FormData, FormMode, ValidationResult};
use crate::utils::error_messages::*;

// Coarse `local@domain.tld` shape, deliberately permissive
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

// ASCII digits only: `\d` would also match other Unicode digits
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[0-9]{{{}}}$", PHONE_DIGITS)).expect("Failed to compile phone regex")
});

/// Checks the coarse shape `local-part@domain.tld`.
///
/// Neither side may contain whitespace or another `@`, and the domain needs
/// at least one dot with something on each side of it. This accepts some
/// addresses RFC 5322 would reject (`a@b..c`, `"x"!@y.z`), which existing
/// fixtures rely on.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Checks a local subscriber number: exactly nine ASCII digits.
///
/// No country code is accepted here. Callers holding an international
/// number must pass it through [`strip_country_code`] first.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Removes a leading `+966`, `00966` or bare `966` country code, if any.
///
/// The bare form is only stripped when exactly nine digits follow it.
///
/// Surrounding whitespace is trimmed. Anything else is returned untouched,
/// so the result still has to go through [`is_valid_phone`].
pub fn strip_country_code(phone: &str) -> &str {
    let phone = phone.trim();
    let code = COUNTRY_CODE.trim_start_matches('+');

    phone
        .strip_prefix(COUNTRY_CODE)
        .or_else(|| phone.strip_prefix("00").and_then(|rest| rest.strip_prefix(code)))
        .or_else(|| {
            // Bare `966` only when a full local number follows it
            phone.strip_prefix(code).filter(|rest| {
                rest.len() == PHONE_DIGITS && rest.bytes().all(|b| b.is_ascii_digit())
            })
        })
        .map(str::trim_start)
        .unwrap_or(phone)
}

/// Checks `password` against the default policy
pub fn validate_password(password: &str) -> ValidationResult {
    DEFAULT_POLICY.validate(password)
}

/// Validates a sign-up / sign-in form against the default policy
pub fn validate_form(form: &FormData, mode: FormMode) -> ValidationResult {
    DEFAULT_POLICY.validate_form(form, mode)
}

impl PasswordPolicy {
    /// Runs every password rule and reports each failing one.
    ///
    /// Rules are not short-circuited: length, letters, digits, then special
    /// characters, in that order.
    pub fn validate(&self, password: &str) -> ValidationResult {
        let mut result = ValidationResult::valid();

        if password.chars().count() < self.min_length {
            result.push(password_too_short(self.min_length));
        }

        if self.require_letter && !password.chars().any(|c| c.is_ascii_alphabetic()) {
            result.push(PASSWORD_NEEDS_LETTERS);
        }

        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            result.push(PASSWORD_NEEDS_NUMBERS);
        }

        if self.requires_special() && !password.chars().any(|c| self.is_special(c)) {
            result.push(PASSWORD_NEEDS_SPECIAL);
        }

        result
    }

    /// Validates the identity field selected by `mode`, then the password.
    ///
    /// Presence is checked before format. A missing password reports only
    /// "Password is required", never the policy errors on top of it.
    pub fn validate_form(&self, form: &FormData, mode: FormMode) -> ValidationResult {
        let mut result = ValidationResult::valid();

        match mode {
            FormMode::Email => match form.email() {
                None => result.push(EMAIL_REQUIRED),
                Some(email) if !is_valid_email(email) => result.push(EMAIL_INVALID),
                Some(_) => {}
            },
            FormMode::Phone => match form.phone() {
                None => result.push(PHONE_REQUIRED),
                Some(phone) if !is_valid_phone(phone) => result.push(PHONE_INVALID),
                Some(_) => {}
            },
        }

        match form.password() {
            None => result.push(PASSWORD_REQUIRED),
            Some(password) => result.append(self.validate(password)),
        }

        debug!(
            "{} form validated: {} error(s)",
            mode,
            result.errors().len()
        );
        result
    }
}
