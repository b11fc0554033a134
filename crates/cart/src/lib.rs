//! Cart engine: the catalog/cart state transitions.
//!
//! A product id moves `InCatalog(available) -> InCart -> {CheckedOut | ReturnedToCatalog}`.
//! All transitions run inside the catalog store's single critical section.

pub mod engine;
pub mod summary;

pub use engine::CartEngine;
pub use summary::CartSummary;
