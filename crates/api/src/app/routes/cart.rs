use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use storefront_cart::CartEngine;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_cart))
        .route("/checkout", post(checkout))
        .route(
            "/item/:id",
            get(get_cart_item).post(add_cart_item).delete(delete_cart_item),
        )
}

pub async fn get_cart(Extension(engine): Extension<CartEngine>) -> axum::response::Response {
    match engine.get_cart() {
        Ok(summary) => (StatusCode::OK, Json(dto::CartResponse::from(summary))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_cart_item(
    Extension(engine): Extension<CartEngine>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let item = match engine.item_from_cart(&id) {
        Ok(item) => item,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let body = dto::ProductByIdResponse::from_lookup(item);
    let status = if body.success {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Json(body)).into_response()
}

pub async fn add_cart_item(
    Extension(engine): Extension<CartEngine>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let ids = match engine.add_item(&id) {
        Ok(ids) => ids,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let success = ids.contains(id.as_str());
    let status = if success {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Json(dto::ApiResponse { success })).into_response()
}

pub async fn delete_cart_item(
    Extension(engine): Extension<CartEngine>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match engine.delete_item_from_cart(&id) {
        Ok(true) => (StatusCode::OK, Json(dto::ApiResponse { success: true })).into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, Json(dto::ApiResponse { success: false })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn checkout(Extension(engine): Extension<CartEngine>) -> axum::response::Response {
    let summary = match engine.checkout_cart() {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let status = if summary.success {
        StatusCode::OK
    } else {
        StatusCode::NOT_IMPLEMENTED
    };
    (status, Json(dto::CartResponse::from(summary))).into_response()
}
