use dogma_core::DogmaError;
use serde::Serialize;
use serde_json::{Value, json};

pub const OK: u16 = 200;
pub const BAD_REQUEST: u16 = 400;
pub const NOT_FOUND: u16 = 404;
pub const METHOD_NOT_ALLOWED: u16 = 405;
pub const UNSUPPORTED_MEDIA_TYPE: u16 = 415;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// JSON envelope returned for every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success { data: Value, status_code: u16 },

    /// `error` is a message, or a list of details for malformed bodies.
    Failure { error: Value, status_code: u16 },
}

impl Response {
    pub fn success<T: Serialize>(data: T) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self::Success {
                data,
                status_code: OK,
            },
            Err(e) => {
                tracing::error!("Failed to encode response: {}", e);
                Self::failure("Failed to encode response", INTERNAL_SERVER_ERROR)
            }
        }
    }

    pub fn failure(error: impl Into<Value>, status_code: u16) -> Self {
        Self::Failure {
            error: error.into(),
            status_code,
        }
    }

    /// A body that parsed as JSON but does not fit the request schema.
    pub fn validation_error(error: &serde_json::Error) -> Self {
        Self::failure(
            json!([{ "type": "validation_error", "msg": error.to_string() }]),
            BAD_REQUEST,
        )
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success { status_code, .. } | Self::Failure { status_code, .. } => *status_code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<DogmaError> for Response {
    fn from(error: DogmaError) -> Self {
        Self::failure(error.message(), error.status_code())
    }
}
