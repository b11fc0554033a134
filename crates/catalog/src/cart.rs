use std::collections::{BTreeMap, BTreeSet};

use storefront_core::{Entity, ProductId};

use crate::product::Product;

/// Products currently reserved for purchase, keyed by id.
///
/// Each entry is a snapshot of the catalog product taken when it was added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: BTreeMap<ProductId, Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `product` unless an entry with its id already exists.
    ///
    /// Returns whether the entry was inserted.
    pub fn insert_if_absent(&mut self, product: Product) -> bool {
        match self.entries.entry(product.id().clone()) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(product);
                true
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Product> {
        self.entries.remove(id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn ids(&self) -> BTreeSet<ProductId> {
        self.entries.keys().cloned().collect()
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
