//! Catalog + cart storage with copy-on-write catalog publication.
//!
//! Readers load the current catalog snapshot without taking any lock. Writers
//! go through [`CatalogStore::begin`], which holds the store's only mutex for
//! the lifetime of the returned [`StoreTransaction`]. That mutex guards the
//! cart map and is the sole path to [`StoreTransaction::commit`], so a
//! compound transition touching both maps is one critical section.

use std::sync::{Arc, Mutex, MutexGuard};

use arc_swap::ArcSwap;

use storefront_core::{DomainError, DomainResult};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::product::{Product, AVAILABLE, RESERVED};

/// Process-wide catalog and cart.
///
/// There is exactly one cart per store; callers that share a store share the
/// cart.
#[derive(Debug)]
pub struct CatalogStore {
    catalog: ArcSwap<Catalog>,
    cart: Mutex<Cart>,
}

impl CatalogStore {
    pub fn new(initial: Catalog) -> Self {
        Self {
            catalog: ArcSwap::from_pointee(initial),
            cart: Mutex::new(Cart::new()),
        }
    }

    /// The currently published catalog.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.catalog.load_full()
    }

    /// All catalog entries, available or not.
    pub fn get_all(&self) -> Vec<Product> {
        self.catalog.load().products().cloned().collect()
    }

    /// The catalog entry for `id`, regardless of quantity.
    pub fn find_by_id(&self, id: &str) -> Option<Product> {
        self.catalog.load().get(id).cloned()
    }

    /// Open the store's critical section.
    pub fn begin(&self) -> DomainResult<StoreTransaction<'_>> {
        let cart = self.cart.lock().map_err(|_| {
            tracing::error!("cart lock poisoned");
            DomainError::invariant("cart lock poisoned")
        })?;
        Ok(StoreTransaction {
            catalog: &self.catalog,
            cart,
        })
    }
}

/// Exclusive access to the cart and to catalog writes.
///
/// Dropping the transaction releases the lock. Changes are visible as soon
/// as they are made; there is no rollback on drop, so callers undo their own
/// partial work before returning an error.
pub struct StoreTransaction<'a> {
    catalog: &'a ArcSwap<Catalog>,
    cart: MutexGuard<'a, Cart>,
}

impl StoreTransaction<'_> {
    pub fn find_by_id(&self, id: &str) -> Option<Product> {
        self.catalog.load().get(id).cloned()
    }

    /// The live cart.
    pub fn get_cart(&self) -> &Cart {
        &self.cart
    }

    pub fn get_cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Snapshot `product` into the cart unless its id is already there.
    pub fn create_cart_entry(&mut self, product: &Product) -> bool {
        self.cart.insert_if_absent(product.clone())
    }

    /// Publish `next` as the whole catalog. Full replacement, not a merge.
    pub fn commit(&mut self, next: Catalog) {
        self.catalog.store(Arc::new(next));
    }

    /// Reserve (`is_adding_back == false`, quantity 0) or restore
    /// (`is_adding_back == true`, quantity 1) one catalog entry.
    ///
    /// Returns `false` without committing when `id` is not in the catalog.
    pub fn update_catalog(&mut self, id: &str, is_adding_back: bool) -> bool {
        let mut next = Catalog::clone(&self.catalog.load());
        let Some(current) = next.get(id) else {
            return false;
        };
        let quantity = if is_adding_back { AVAILABLE } else { RESERVED };
        let updated = current.with_quantity(quantity);
        next.replace(updated);
        self.commit(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Entity, ProductId};

    fn p(id: &str, price: u64, quantity: u32) -> Product {
        Product::new(ProductId::parse(id).unwrap(), format!("Product {id}"), price, quantity)
    }

    fn store() -> CatalogStore {
        CatalogStore::new(Catalog::from_products([p("001", 10, 1), p("002", 20, 0)]).unwrap())
    }

    #[test]
    fn find_by_id_ignores_quantity() {
        let store = store();
        assert_eq!(store.find_by_id("002").map(|p| p.quantity()), Some(0));
        assert!(store.find_by_id("missing").is_none());
    }

    #[test]
    fn get_all_includes_unavailable_products() {
        let all = store().get_all();
        let ids: Vec<&str> = all.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["001", "002"]);
    }

    #[test]
    fn update_catalog_missing_id_does_not_commit() {
        let store = store();
        let before = store.snapshot();

        let mut tx = store.begin().unwrap();
        assert!(!tx.update_catalog("missing", false));
        drop(tx);

        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn update_catalog_publishes_a_new_snapshot() {
        let store = store();
        let before = store.snapshot();

        let mut tx = store.begin().unwrap();
        assert!(tx.update_catalog("001", false));
        drop(tx);

        // Readers holding the old snapshot keep seeing the old value.
        assert_eq!(before.get("001").map(Product::quantity), Some(1));
        assert_eq!(store.find_by_id("001").map(|p| p.quantity()), Some(0));
    }

    #[test]
    fn update_catalog_is_binary() {
        let store = CatalogStore::new(Catalog::from_products([p("001", 10, 5)]).unwrap());
        let mut tx = store.begin().unwrap();

        assert!(tx.update_catalog("001", true));
        assert_eq!(tx.find_by_id("001").map(|p| p.quantity()), Some(1));

        assert!(tx.update_catalog("001", false));
        assert!(tx.update_catalog("001", false));
        assert_eq!(tx.find_by_id("001").map(|p| p.quantity()), Some(0));

        let restored = tx.find_by_id("001").unwrap();
        assert_eq!(restored.name(), "Product 001");
        assert_eq!(restored.price(), 10);
    }

    #[test]
    fn commit_replaces_whole_catalog() {
        let store = store();
        let mut tx = store.begin().unwrap();
        tx.commit(Catalog::from_products([p("003", 30, 1)]).unwrap());
        drop(tx);

        assert!(store.find_by_id("001").is_none());
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn create_cart_entry_is_idempotent_by_id() {
        let store = store();
        let mut tx = store.begin().unwrap();

        assert!(tx.create_cart_entry(&p("001", 10, 1)));
        assert!(!tx.create_cart_entry(&p("001", 99, 1)));
        assert_eq!(tx.get_cart().len(), 1);
        assert_eq!(tx.get_cart().get("001").map(Product::price), Some(10));
    }

    #[test]
    fn cart_changes_are_visible_to_later_transactions() {
        let store = store();
        {
            let mut tx = store.begin().unwrap();
            tx.create_cart_entry(&p("001", 10, 1));
        }
        let mut tx = store.begin().unwrap();
        assert!(tx.get_cart().contains("001"));
        tx.get_cart_mut().remove("001");
        assert!(tx.get_cart().is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the last update decides the quantity, whatever came before.
            #[test]
            fn last_update_wins(initial in 0u32..10, ops in proptest::collection::vec(any::<bool>(), 1..20)) {
                let store = CatalogStore::new(Catalog::from_products([p("001", 10, initial)]).unwrap());
                let mut tx = store.begin().unwrap();
                for adding_back in &ops {
                    prop_assert!(tx.update_catalog("001", *adding_back));
                }
                drop(tx);

                let expected = if *ops.last().unwrap() { AVAILABLE } else { RESERVED };
                prop_assert_eq!(store.find_by_id("001").map(|p| p.quantity()), Some(expected));
                prop_assert_eq!(store.get_all().len(), 1);
            }
        }
    }
}
