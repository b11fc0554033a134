use std::collections::BTreeSet;
use std::sync::Arc;

use storefront_catalog::{CatalogStore, Product, StoreTransaction};
use storefront_core::{is_blank, DomainError, DomainResult, Entity, ProductId};

use crate::summary::CartSummary;

/// Catalog/cart state-transition engine.
///
/// Every method that reads or writes the cart runs inside one
/// [`StoreTransaction`], so the check-then-act sequences below cannot
/// interleave with each other.
#[derive(Debug, Clone)]
pub struct CartEngine {
    store: Arc<CatalogStore>,
}

impl CartEngine {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Look up a catalog product by id.
    ///
    /// A blank id is a caller error; an unknown id is `Ok(None)`.
    pub fn get_by_id(&self, id: &str) -> DomainResult<Option<Product>> {
        ensure_not_blank(id)?;
        Ok(self.store.find_by_id(id))
    }

    /// Every catalog entry, available or not.
    pub fn get_all(&self) -> Vec<Product> {
        self.store.get_all()
    }

    /// Number of products that can still be added to the cart.
    pub fn get_catalog_size(&self) -> usize {
        self.store.snapshot().available_count()
    }

    pub fn get_cart(&self) -> DomainResult<CartSummary> {
        let tx = self.store.begin()?;
        CartSummary::of(tx.get_cart())
    }

    /// Reserve `id` in the cart and return the ids of everything in the cart.
    pub fn add_item(&self, id: &str) -> DomainResult<BTreeSet<ProductId>> {
        let mut tx = self.store.begin()?;

        if tx.get_cart().contains(id) {
            return Err(DomainError::already_in_cart(id));
        }

        ensure_not_blank(id)?;
        let product = tx
            .find_by_id(id)
            .ok_or_else(|| DomainError::invalid_argument("Product not available"))?;
        if !product.is_available() {
            return Err(DomainError::invalid_argument("Product already purchased"));
        }

        tx.create_cart_entry(&product);
        if !tx.update_catalog(id, false) {
            tx.get_cart_mut().remove(id);
            return Err(invariant(&tx, id, "catalog entry vanished during reservation"));
        }

        tracing::info!(product_id = %product.id(), cart_size = tx.get_cart().len(), "item reserved");
        Ok(tx.get_cart().ids())
    }

    /// The cart entry for `id`, if any.
    pub fn item_from_cart(&self, id: &str) -> DomainResult<Option<Product>> {
        let tx = self.store.begin()?;
        Ok(tx.get_cart().get(id).cloned())
    }

    /// Remove `id` from the cart and make it available in the catalog again.
    ///
    /// Returns `Ok(false)` when `id` is not in the cart.
    pub fn delete_item_from_cart(&self, id: &str) -> DomainResult<bool> {
        let mut tx = self.store.begin()?;

        let Some(entry) = tx.get_cart_mut().remove(id) else {
            return Ok(false);
        };
        if !tx.update_catalog(id, true) {
            tx.create_cart_entry(&entry);
            return Err(invariant(&tx, id, "catalog entry vanished during restoration"));
        }

        tracing::info!(product_id = %entry.id(), cart_size = tx.get_cart().len(), "item returned to catalog");
        Ok(true)
    }

    /// Finalize the cart: report its contents and empty it.
    ///
    /// Checked-out products stay unavailable in the catalog. An empty cart
    /// yields an unsuccessful summary and changes nothing.
    pub fn checkout_cart(&self) -> DomainResult<CartSummary> {
        let mut tx = self.store.begin()?;

        if tx.get_cart().is_empty() {
            return Ok(CartSummary::failed());
        }

        let summary = CartSummary::of(tx.get_cart())?;
        tx.get_cart_mut().clear();

        tracing::info!(
            items = summary.products.len(),
            total_cost = summary.total_cost,
            "cart checked out"
        );
        Ok(summary)
    }
}

fn ensure_not_blank(id: &str) -> DomainResult<()> {
    if is_blank(id) {
        return Err(DomainError::invalid_argument("Product Id can not be blank"));
    }
    Ok(())
}

fn invariant(tx: &StoreTransaction<'_>, id: &str, what: &str) -> DomainError {
    tracing::error!(product_id = %id, cart_size = tx.get_cart().len(), "{what}");
    DomainError::invariant(format!("{what}: {id}"))
}
