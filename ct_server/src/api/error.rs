//! API error type and its JSON rendering.
//!
//! Every handler returns `Result<_, ApiError>`. Each variant fixes the status
//! code and body the client sees:
//!
//! | Variant | Status | Body |
//! |---|---|---|
//! | `Configuration` | 500 | `{error: "Configuration error", details: [..]}` |
//! | `BadRequest` | 400 | `{error: <message>}` |
//! | `InvalidBody` | 400 | `{error: "Invalid request body", details: <reason>}` |
//! | `Riot` | Riot's status | `{error: <context>, details: <raw text>}` |
//! | `Leaguepedia` | 500 | `{error: "Failed to fetch <resource> from Leaguepedia"}` |
//! | `MethodNotAllowed` | 405 | `{error: "Method not allowed"}` |
//! | `Internal` | 500 | `{error: "Internal server error"}` |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use custom_tracker::upstream::UpstreamError;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Riot settings failed validation
    #[error("Configuration error")]
    Configuration(Vec<String>),

    #[error("{0}")]
    BadRequest(String),

    /// Body is not JSON or does not fit the payload shape
    #[error("Invalid request body")]
    InvalidBody(String),

    /// Riot answered with a non-2xx status
    #[error("{context}")]
    Riot {
        status: u16,
        context: &'static str,
        details: String,
    },

    /// Any Leaguepedia backend failure. The backend status is not relayed.
    #[error("Failed to fetch {0} from Leaguepedia")]
    Leaguepedia(&'static str),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Translate a failed Riot call.
    ///
    /// Status errors keep Riot's code and raw text; transport and decode
    /// failures become a generic 500.
    pub fn from_riot(err: UpstreamError, context: &'static str) -> Self {
        match err {
            UpstreamError::Status { status, body } => {
                tracing::error!(upstream_status = status, "Riot API Error: {}", body);
                ApiError::Riot {
                    status,
                    context,
                    details: body,
                }
            }
            other => {
                tracing::error!("{}: {}", context, other);
                ApiError::Internal
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Riot { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Leaguepedia(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            ApiError::Configuration(errors) => Some(json!(errors)),
            ApiError::InvalidBody(reason) => Some(json!(reason)),
            ApiError::Riot { details, .. } => Some(json!(details)),
            _ => None,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            details: self.details(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Configuration(vec![]).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            ApiError::Leaguepedia("games").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_riot_status_is_relayed() {
        let err = ApiError::from_riot(
            UpstreamError::Status {
                status: 429,
                body: "Rate limit exceeded".to_string(),
            },
            "Failed to create tournament with Riot API",
        );
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.to_string(), "Failed to create tournament with Riot API");
        assert_eq!(err.details(), Some(json!("Rate limit exceeded")));
    }

    #[test]
    fn test_riot_non_status_failure_is_internal() {
        let err = ApiError::from_riot(UpstreamError::Decode("eof".into()), "ctx");
        assert!(matches!(err, ApiError::Internal));
    }

    #[test]
    fn test_leaguepedia_message() {
        assert_eq!(
            ApiError::Leaguepedia("tournaments").to_string(),
            "Failed to fetch tournaments from Leaguepedia"
        );
        assert_eq!(ApiError::Leaguepedia("games").details(), None);
    }

    #[test]
    fn test_invalid_riot_status_falls_back_to_bad_gateway() {
        let err = ApiError::Riot {
            status: 42,
            context: "ctx",
            details: String::new(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
