//! Synthetic test data for sign-up / sign-in runs.
//!
//! Generated values always pass the matching validator, so repeated or
//! parallel runs can register fresh accounts without colliding. The
//! invalid catalogs drive the negative paths.

use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{FormData, FormMode};
use crate::utils::error_messages::*;
use crate::utils::validation::{
    PasswordPolicy, COUNTRY_CODE, DEFAULT_POLICY, FIXTURE_EMAIL_DOMAIN, FIXTURE_EMAIL_PREFIX,
    MOBILE_PREFIX, PHONE_DIGITS,
};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Returns a fresh address like `testuser_1760870400123_0042137731@example.com`.
///
/// Millisecond timestamp plus a random suffix: two calls collide only if
/// they land in the same millisecond and draw the same suffix.
pub fn generate_random_email() -> String {
    let suffix: u32 = rand::rng().random();

    format!(
        "{}_{}_{:010}@{}",
        FIXTURE_EMAIL_PREFIX,
        Utc::now().timestamp_millis(),
        suffix,
        FIXTURE_EMAIL_DOMAIN
    )
}

/// Returns a local mobile number: the mobile prefix then zero padded random
/// digits, nine digits in total. No country code.
pub fn generate_random_phone() -> String {
    let width = PHONE_DIGITS - 1;
    let subscriber = rand::rng().random_range(0..10u64.pow(width as u32));

    format!("{}{:0width$}", MOBILE_PREFIX, subscriber, width = width)
}

/// [`generate_random_phone`] with the country code in front
pub fn generate_random_international_phone() -> String {
    format!("{}{}", COUNTRY_CODE, generate_random_phone())
}

/// Returns a password satisfying the default policy
pub fn generate_valid_password() -> String {
    DEFAULT_POLICY.generate_password()
}

impl PasswordPolicy {
    /// Builds a password that passes [`PasswordPolicy::validate`].
    ///
    /// One character of each required class is placed first, the rest is
    /// padded with random alphanumerics up to `min_length`, then the whole
    /// thing is shuffled.
    pub fn generate_password(&self) -> String {
        let mut rng = rand::rng();
        let mut chars: Vec<char> = Vec::with_capacity(self.min_length.max(3));

        if self.require_letter {
            chars.push(char::from(LETTERS[rng.random_range(0..LETTERS.len())]));
        }
        if self.require_digit {
            chars.push(char::from(DIGITS[rng.random_range(0..DIGITS.len())]));
        }
        if self.requires_special() {
            let specials: Vec<char> = self.special_chars.iter().copied().collect();
            chars.push(specials[rng.random_range(0..specials.len())]);
        }

        let padding = self.min_length.saturating_sub(chars.len());
        chars.extend(
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(padding)
                .map(char::from),
        );

        chars.shuffle(&mut rng);
        chars.into_iter().collect()
    }
}

impl FormData {
    /// A complete, valid payload for `mode` using fresh fixtures
    pub fn random(mode: FormMode) -> Self {
        Self::random_with(&DEFAULT_POLICY, mode)
    }

    /// Same as [`FormData::random`], with a password built for `policy`
    pub fn random_with(policy: &PasswordPolicy, mode: FormMode) -> Self {
        let form = FormData::new()
            .with_password(policy.generate_password())
            .with_subscribe(false);

        match mode {
            FormMode::Email => form.with_email(generate_random_email()),
            FormMode::Phone => form.with_phone(generate_random_phone()),
        }
    }
}

/// Addresses the coarse email check rejects
pub fn invalid_emails() -> Vec<&'static str> {
    vec![
        "plainaddress",
        "user@domain",
        "@example.com",
        "user@",
        "user@.com",
        "user name@example.com",
        "user@@example.com",
    ]
}

/// Values the local phone check rejects
pub fn invalid_phones() -> Vec<&'static str> {
    vec![
        "50123456",
        "5012345678",
        "501-234-567",
        "50123456a",
        "+966501234567",
    ]
}

/// Passwords paired with the exact errors the default policy reports
pub fn weak_passwords() -> Vec<(&'static str, Vec<String>)> {
    let too_short = password_too_short(DEFAULT_POLICY.min_length);

    vec![
        (
            "12345678",
            vec![
                too_short.clone(),
                PASSWORD_NEEDS_LETTERS.to_string(),
                PASSWORD_NEEDS_SPECIAL.to_string(),
            ],
        ),
        ("Abcdef1!", vec![too_short.clone()]),
        ("abcdefghi!", vec![PASSWORD_NEEDS_NUMBERS.to_string()]),
        ("abcdefgh1", vec![PASSWORD_NEEDS_SPECIAL.to_string()]),
        ("123456789!", vec![PASSWORD_NEEDS_LETTERS.to_string()]),
        (
            "password",
            vec![
                too_short,
                PASSWORD_NEEDS_NUMBERS.to_string(),
                PASSWORD_NEEDS_SPECIAL.to_string(),
            ],
        ),
    ]
}
