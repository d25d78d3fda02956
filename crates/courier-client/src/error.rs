use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("api_base_url_missing")]
    BaseUrlMissing,
    #[error("api_base_url_invalid")]
    BaseUrlInvalid,
    #[error("api_invalid_path")]
    InvalidPath,
    #[error("api_request_failed:{message}")]
    Request { message: String },
    #[error("api_read_failed:{message}")]
    Read { message: String },
    #[error("api_unauthorized:{body}")]
    Unauthorized { body: String },
    #[error("api_http_{status}:{body}")]
    Http { status: StatusCode, body: String },
    #[error("api_json_decode_failed:{message}")]
    Decode { message: String },
    #[error("session store failed: {0}")]
    Session(#[from] courier_client_core::SessionError),
}

/// Structured validation body some 4xx responses carry:
/// `{ code, message, metadata: { field: reason } }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldErrors {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ApiError {
    /// Tries to map a 4xx body onto per-field errors. Returns `None` when
    /// the error is not an HTTP client error or the body has another shape;
    /// callers fall back to a generic message.
    #[must_use]
    pub fn field_errors(&self) -> Option<FieldErrors> {
        let (status, body) = match self {
            Self::Http { status, body } => (*status, body.as_str()),
            _ => return None,
        };
        if !status.is_client_error() {
            return None;
        }
        let parsed: FieldErrors = serde_json::from_str(body).ok()?;
        if parsed.metadata.is_empty() {
            return None;
        }
        Some(parsed)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

pub(crate) fn format_http_error(status: StatusCode, body: &[u8]) -> ApiError {
    let body = non_empty_string(String::from_utf8_lossy(body).to_string())
        .unwrap_or_else(|| "<empty>".to_string());
    if status == StatusCode::UNAUTHORIZED {
        ApiError::Unauthorized { body }
    } else {
        ApiError::Http { status, body }
    }
}

fn non_empty_string(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
