use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::DomainError;

/// Map an engine error to its HTTP response.
///
/// Client errors carry their message; internal errors carry none.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidArgument(msg) => json_error(StatusCode::NOT_FOUND, "invalid_argument", msg),
        DomainError::AlreadyInCart(id) => json_error(
            StatusCode::NOT_IMPLEMENTED,
            "already_in_cart",
            format!("product {id} already added"),
        ),
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            tracing::error!(error = %msg, "request failed on an internal invariant");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "internal error")
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
