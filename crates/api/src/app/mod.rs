//! HTTP API application wiring (Axum router + engine wiring).
//!
//! - `routes/`: HTTP routes + handlers (catalog reads, cart transitions)
//! - `dto.rs`: response DTOs and mapping from engine types
//! - `errors.rs`: consistent error responses

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use storefront_cart::CartEngine;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(engine: CartEngine) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/demo", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(engine)),
        )
}
