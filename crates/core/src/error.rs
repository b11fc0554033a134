//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// "Not found" is deliberately absent: lookups that miss return `None` or
/// `false`, and only genuine failures travel through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The caller supplied an argument the operation cannot act on
    /// (blank id, unknown product, product already purchased).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The product is already reserved in the cart.
    #[error("product already in cart: {0}")]
    AlreadyInCart(String),

    /// A record failed validation (e.g. malformed catalog data).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated. Always an internal failure.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn already_in_cart(id: impl Into<String>) -> Self {
        Self::AlreadyInCart(id.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Whether this error is caused by the caller rather than the system.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::InvariantViolation(_))
    }
}
