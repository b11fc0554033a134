use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_cart::CartEngine;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/size", get(catalog_size))
        .route("/all", get(list_products))
        .route("/healthCheck/:id", get(get_product))
}

pub async fn catalog_size(Extension(engine): Extension<CartEngine>) -> axum::response::Response {
    let body = dto::CatalogSizeResponse::from_count(engine.get_catalog_size());
    let status = if body.success {
        StatusCode::OK
    } else {
        StatusCode::NOT_IMPLEMENTED
    };
    (status, Json(body)).into_response()
}

pub async fn list_products(Extension(engine): Extension<CartEngine>) -> axum::response::Response {
    (StatusCode::OK, Json(engine.get_all())).into_response()
}

pub async fn get_product(
    Extension(engine): Extension<CartEngine>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product = match engine.get_by_id(&id) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let body = dto::ProductByIdResponse::from_lookup(product);
    let status = if body.success {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Json(body)).into_response()
}
