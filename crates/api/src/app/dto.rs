use serde::Serialize;

use storefront_cart::CartSummary;
use storefront_catalog::Product;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct CatalogSizeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ProductByIdResponse {
    pub success: bool,
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub success: bool,
    pub products: Vec<Product>,
    pub total_cost: u64,
}

// -------------------------
// Mapping helpers
// -------------------------

impl From<CartSummary> for CartResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            success: summary.success,
            products: summary.products,
            total_cost: summary.total_cost,
        }
    }
}

impl CatalogSizeResponse {
    /// Zero purchasable products is reported as a failure without a count.
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            Self {
                success: false,
                count: None,
            }
        } else {
            Self {
                success: true,
                count: Some(count),
            }
        }
    }
}

impl ProductByIdResponse {
    pub fn from_lookup(product: Option<Product>) -> Self {
        Self {
            success: product.is_some(),
            products: product.into_iter().collect(),
        }
    }
}
