//! Status code expectations for the authentication API.
//!
//! Page flows submit a form and then wait for the matching API call; these
//! checks decide whether the observed response status is the one the flow
//! expects.

use derive_more::Display;
use http::StatusCode;
use log::warn;
use thiserror::Error;

/// What a flow expects the API to answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Expectation {
    /// Sign-in or sign-up accepted: 200 or 201
    #[display("success (200/201)")]
    Success,
    /// Rejected input or credentials: 400 or 403
    #[display("client error (400/403)")]
    ClientError,
    /// Too many attempts: 429
    #[display("rate limited (429)")]
    RateLimited,
    /// Logout: 204
    #[display("no content (204)")]
    NoContent,
    #[display("exactly {_0}")]
    Exact(StatusCode),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiCheckError {
    #[error("expected {expected}, got {actual}")]
    UnexpectedStatus {
        expected: Expectation,
        actual: StatusCode,
    },
    #[error("{0} is not an HTTP status code")]
    InvalidStatus(u16),
}

impl Expectation {
    /// Status codes satisfying this expectation
    pub fn statuses(&self) -> Vec<StatusCode> {
        match self {
            Self::Success => vec![StatusCode::OK, StatusCode::CREATED],
            Self::ClientError => vec![StatusCode::BAD_REQUEST, StatusCode::FORBIDDEN],
            Self::RateLimited => vec![StatusCode::TOO_MANY_REQUESTS],
            Self::NoContent => vec![StatusCode::NO_CONTENT],
            Self::Exact(status) => vec![*status],
        }
    }

    pub fn accepts(&self, status: StatusCode) -> bool {
        self.statuses().contains(&status)
    }

    pub fn check(&self, status: StatusCode) -> Result<(), ApiCheckError> {
        if self.accepts(status) {
            return Ok(());
        }

        warn!("API answered {} where {} was expected", status, self);
        Err(ApiCheckError::UnexpectedStatus {
            expected: *self,
            actual: status,
        })
    }

    /// Same as [`Expectation::check`] for a raw numeric status
    pub fn check_code(&self, code: u16) -> Result<(), ApiCheckError> {
        let status = StatusCode::from_u16(code).map_err(|_| ApiCheckError::InvalidStatus(code))?;
        self.check(status)
    }
}
