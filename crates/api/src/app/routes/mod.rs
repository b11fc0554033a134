use axum::Router;

pub mod cart;
pub mod catalog;
pub mod system;

/// Router for the catalog and cart endpoints.
pub fn router() -> Router {
    Router::new().merge(catalog::router()).nest("/cart", cart::router())
}
