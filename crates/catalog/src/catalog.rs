use std::collections::BTreeMap;

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;

/// Mapping from product id to product.
///
/// Keys are always taken from the product's own id, so a key can never
/// disagree with its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog keyed by id. Duplicate ids are rejected.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let mut entries = BTreeMap::new();
        for product in products {
            let id = product.id().clone();
            if entries.insert(id.clone(), product).is_some() {
                return Err(DomainError::validation(format!("duplicate product id: {id}")));
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Insert or replace the entry for `product`'s id, returning the previous one.
    pub fn replace(&mut self, product: Product) -> Option<Product> {
        self.entries.insert(product.id().clone(), product)
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

    /// Number of entries that can still be put in the cart.
    pub fn available_count(&self) -> usize {
        self.products().filter(|p| p.is_available()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: &str, quantity: u32) -> Product {
        Product::new(ProductId::parse(id).unwrap(), format!("Product {id}"), 10, quantity)
    }

    #[test]
    fn from_products_rejects_duplicates() {
        let err = Catalog::from_products([p("001", 1), p("001", 0)]).unwrap_err();
        assert_eq!(err, DomainError::validation("duplicate product id: 001"));
    }

    #[test]
    fn available_count_skips_reserved_entries() {
        let catalog = Catalog::from_products([p("001", 1), p("002", 1), p("003", 0)]).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.available_count(), 2);
    }

    #[test]
    fn replace_keys_by_product_id() {
        let mut catalog = Catalog::from_products([p("001", 1)]).unwrap();
        let previous = catalog.replace(p("001", 0));
        assert_eq!(previous.map(|p| p.quantity()), Some(1));
        assert_eq!(catalog.get("001").map(Product::quantity), Some(0));
        assert_eq!(catalog.len(), 1);
    }
}
