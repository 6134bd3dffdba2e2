use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use itemdesk_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    tracing::debug!(error = %err, "request rejected");
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::NotFound | DomainError::InvalidId(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", "item not found")
        }
        DomainError::Conflict(msg) => json_error(StatusCode::BAD_REQUEST, "already_deleted", msg),
    }
}

pub fn body_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!(error = %rejection, "unreadable request body");
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

/// `{"error": <message>, "code": <code>}` with the given status.
pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
            "code": code,
        })),
    )
        .into_response()
}
