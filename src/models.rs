//! Data model exchanged with the validation engine

use derive_more::Display;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use strum_macros::EnumIter;

/// Which identity field keys a sign-up / sign-in submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[display("email")]
    Email,
    #[display("phone")]
    Phone,
}

/// Raw values of an authentication form, as read from (or about to be
/// typed into) the page.
///
/// Every field is optional. A field holding only whitespace counts as
/// missing, exactly like an absent one. Deserialization never fails on a
/// wrongly typed field: it is read as missing instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_bool")]
    pub subscribe: Option<bool>,
}

// Anything but a string is treated as an empty field
fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Bool(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn with_subscribe(mut self, subscribe: bool) -> Self {
        self.subscribe = Some(subscribe);
        self
    }

    /// The email, unless missing or blank
    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    /// The phone number, unless missing or blank
    pub fn phone(&self) -> Option<&str> {
        present(&self.phone)
    }

    /// The password, unless missing or blank
    pub fn password(&self) -> Option<&str> {
        present(&self.password)
    }

    /// The identity field selected by `mode`, unless missing or blank
    pub fn identity(&self, mode: FormMode) -> Option<&str> {
        match mode {
            FormMode::Email => self.email(),
            FormMode::Phone => self.phone(),
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

/// Outcome of a validation call.
///
/// Only the error list is stored; validity is derived from it so the two
/// can never disagree. Errors keep the order in which rules were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    /// A result with no errors
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// True if `message` is one of the reported errors (exact match)
    pub fn contains(&self, message: &str) -> bool {
        self.errors.iter().any(|error| error == message)
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    pub(crate) fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub(crate) fn append(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "valid")
        } else {
            write!(f, "invalid: {}", self.errors.join("; "))
        }
    }
}
