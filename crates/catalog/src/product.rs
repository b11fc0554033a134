use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

/// Quantity of a product that can be put in the cart.
pub const AVAILABLE: u32 = 1;

/// Quantity of a product that is reserved in the cart or already purchased.
pub const RESERVED: u32 = 0;

/// A catalog product.
///
/// Immutable: a change in availability produces a new value through
/// [`Product::with_quantity`]. `quantity` is catalog availability, not a
/// line-item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    /// Price in the smallest currency unit.
    price: u64,
    quantity: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: u64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Can this product be put in the cart?
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Same id, name and price with a different quantity.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
