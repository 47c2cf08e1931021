use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("session store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("keyring: {0}")]
    Keyring(String),
    #[error("session store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("session expired; log in again")]
    AuthExpired,
    #[error("request failed: {status} {body}")]
    Http { status: StatusCode, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }

    /// Human-readable message the backend put in an error body, if any.
    ///
    /// Looks at `detail`, then `error`, then falls back to the raw body.
    pub fn detail(&self) -> Option<String> {
        let Self::Http { body, .. } = self else {
            return None;
        };
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            for key in ["detail", "error"] {
                if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                    return Some(message.to_string());
                }
            }
        }
        let body = body.trim();
        (!body.is_empty()).then(|| body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, body: &str) -> ApiError {
        ApiError::Http {
            status: StatusCode::from_u16(status).expect("status"),
            body: body.to_string(),
        }
    }

    #[test]
    fn detail_prefers_detail_field() {
        let err = http(
            401,
            r#"{"detail":"No active account found with the given credentials"}"#,
        );
        assert_eq!(
            err.detail().as_deref(),
            Some("No active account found with the given credentials")
        );
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn detail_reads_error_field_and_plain_bodies() {
        assert_eq!(
            http(400, r#"{"error":"No file provided"}"#).detail().as_deref(),
            Some("No file provided")
        );
        assert_eq!(
            http(502, " bad gateway \n").detail().as_deref(),
            Some("bad gateway")
        );
        assert_eq!(http(500, "").detail(), None);
        assert_eq!(ApiError::AuthExpired.detail(), None);
    }
}
