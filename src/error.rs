/*!
Address workflow errors.
*/
use serde::Deserialize;
use thiserror::Error;

pub use reqwest::Error as Http;
pub use serde_json::Error as Json;

/// Errors that abort a page request. Everything else the workflow can
/// recover from is shown to the user as a [`FieldError`](crate::FieldError).
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Template(#[from] TemplateError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("invalid redirect location: {0}")]
    Redirect(#[from] reqwest::header::InvalidHeaderValue),
}

/// Failure writing the donor's details back to storage.
#[derive(Debug, Error)]
#[error("could not save donor details: {message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure rendering a page.
#[derive(Debug, Error)]
#[error("could not render page: {message}")]
pub struct TemplateError {
    pub message: String,
}

impl TemplateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url '{value}': {source}")]
    BaseUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("invalid timeout '{0}'")]
    Timeout(String),
    #[error("{0}")]
    Http(#[from] Http),
}

/// The postcode service rejected the query itself, usually because the
/// postcode is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Error)]
#[error("{statuscode}: {message}")]
pub struct BadRequestError {
    pub statuscode: u16,
    pub message: String,
}

/// Errors from [`AddressClient::lookup_postcode`](crate::AddressClient::lookup_postcode).
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{0}")]
    BadRequest(BadRequestError),
    #[error("{0}")]
    Http(#[from] Http),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("{0}")]
    Json(#[from] Json),
}

impl LookupError {
    /// True when the postcode itself was rejected rather than the service
    /// failing.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, LookupError::BadRequest(_))
    }
}

impl From<BadRequestError> for LookupError {
    fn from(e: BadRequestError) -> Self {
        LookupError::BadRequest(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request() {
        let err: LookupError = BadRequestError {
            statuscode: 400,
            message: "Requested postcode must contain a minimum of the sector plus 1 digit of the district e.g. SO1. Requested postcode was x".into(),
        }
        .into();
        assert!(err.is_bad_request());
        assert!(!LookupError::Status(reqwest::StatusCode::BAD_GATEWAY).is_bad_request());
    }

    #[test]
    fn display() {
        assert_eq!(
            "could not save donor details: down",
            Error::from(StoreError::new("down")).to_string()
        );
    }
}
