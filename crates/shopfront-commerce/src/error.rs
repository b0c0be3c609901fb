//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Search and checkout step derivation are infallible; these cover the
/// edges where external data enters the crate.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A price string could not be parsed as a decimal amount.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Identifier is not a valid number.
    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),

    /// Path does not match any storefront route.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
