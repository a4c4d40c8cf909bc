use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Why a raw parameter could not be bound to an enum kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Input is neither a name nor a known code of a coded kind.
    #[error("Invalid position, must be one of {valid}")]
    InvalidFingerPosition { valid: String },

    #[error("No variant of {kind} matches '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },
}

impl ResolveError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidFingerPosition { .. } => ErrorCode::InvalidPosition,
            Self::InvalidEnumValue { .. } => ErrorCode::InvalidParams,
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.code().status()
    }
}

/// Machine readable classification handed to the HTTP error handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidPosition,
    InvalidParams,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidPosition => "INVALID_POSITION",
            Self::InvalidParams => "INVALID_PARAMS",
        }
    }

    /// Both codes are validation failures.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidPosition | Self::InvalidParams => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(feature = "axum")]
mod response {
    use super::ResolveError;
    use axum::Json;
    use axum::response::{IntoResponse, Response};
    use serde_json::json;
    use tracing::warn;

    fn log_error(error: &ResolveError) {
        match error {
            ResolveError::InvalidFingerPosition { .. } => {
                warn!("Rejected finger position: {}", error);
            }
            ResolveError::InvalidEnumValue { kind, value } => {
                warn!("Rejected value '{}' for {}", value, kind);
            }
        }
    }

    impl IntoResponse for ResolveError {
        fn into_response(self) -> Response {
            log_error(&self);

            let code = self.code();
            let body = Json(json!({ "error": self.to_string(), "code": code.as_str() }));
            (code.status(), body).into_response()
        }
    }
}
