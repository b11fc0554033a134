use storefront_catalog::{Cart, Product};
use storefront_core::{DomainError, DomainResult};

/// Cart contents plus their summed price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSummary {
    pub success: bool,
    pub products: Vec<Product>,
    /// Sum of `price` over `products`, in the smallest currency unit.
    pub total_cost: u64,
}

impl CartSummary {
    /// Summarize `cart`. An empty cart is a successful, zero-cost summary.
    pub fn of(cart: &Cart) -> DomainResult<Self> {
        let mut total_cost: u64 = 0;
        let mut products = Vec::with_capacity(cart.len());
        for product in cart.products() {
            total_cost = total_cost
                .checked_add(product.price())
                .ok_or_else(|| DomainError::invariant("cart total overflowed"))?;
            products.push(product.clone());
        }
        Ok(Self {
            success: true,
            products,
            total_cost,
        })
    }

    /// Result of an operation that had nothing to act on.
    pub fn failed() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    fn p(id: &str, price: u64) -> Product {
        Product::new(ProductId::parse(id).unwrap(), "Product", price, 1)
    }

    #[test]
    fn empty_cart_is_successful_and_free() {
        let summary = CartSummary::of(&Cart::new()).unwrap();
        assert!(summary.success);
        assert!(summary.products.is_empty());
        assert_eq!(summary.total_cost, 0);
    }

    #[test]
    fn sums_prices() {
        let mut cart = Cart::new();
        cart.insert_if_absent(p("001", 10));
        cart.insert_if_absent(p("002", 20));
        let summary = CartSummary::of(&cart).unwrap();
        assert_eq!(summary.products.len(), 2);
        assert_eq!(summary.total_cost, 30);
    }

    #[test]
    fn overflow_is_an_invariant_violation() {
        let mut cart = Cart::new();
        cart.insert_if_absent(p("001", u64::MAX));
        cart.insert_if_absent(p("002", 1));
        let err = CartSummary::of(&cart).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn failed_summary_is_unsuccessful() {
        let summary = CartSummary::failed();
        assert!(!summary.success);
        assert_eq!(summary.total_cost, 0);
    }
}
