//! Catalog store: products, the catalog/cart maps, and startup loading.
//!
//! The store owns both maps. Catalog reads go through an immutable published
//! snapshot; every write (to either map) happens inside a [`StoreTransaction`]
//! that holds the store's single lock.

pub mod cart;
pub mod catalog;
pub mod loader;
pub mod product;
pub mod store;

pub use cart::Cart;
pub use catalog::Catalog;
pub use loader::{load_catalog, parse_catalog, LoadError};
pub use product::Product;
pub use store::{CatalogStore, StoreTransaction};
