use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Error taxonomy for the user directory.
///
/// Every handler propagates `AppError` with `?`; the `ResponseError` impl maps
/// each variant to its HTTP status and a `{"error": ...}` body. Internal errors
/// keep the underlying cause server-side only.
#[derive(Debug)]
pub enum AppError {
    /// A required request field is absent. Distinct from NotFound.
    MissingField(&'static str),
    /// Unique-key violation (duplicate email).
    Conflict(String),
    /// No document matched the lookup key.
    NotFound(String),
    /// Store-level rejection of the payload; message is surfaced to the client.
    BadRequest(String),
    /// Any other store or connectivity fault; message stays in the logs.
    Internal(String),
}

impl AppError {
    fn client_message(&self) -> String {
        match self {
            AppError::MissingField(field) => {
                let mut msg = field.to_string();
                if let Some(first) = msg.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                format!("{} is required", msg)
            }
            AppError::Conflict(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingField(field) => write!(f, "Missing field: {}", field),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(cause) = self {
            log::error!("❌ Internal error: {}", cause);
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.client_message()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MissingField("email").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("User already exists".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NotFound("User not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_missing_field_body() {
        let resp = AppError::MissingField("email").error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "Email is required" }));
    }

    #[tokio::test]
    async fn test_internal_error_is_sanitized() {
        let resp = AppError::Internal("pool exhausted at 10.0.0.3:27017".into()).error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
    }
}
