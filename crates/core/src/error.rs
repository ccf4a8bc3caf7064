//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// One variant per client-facing error kind; the `Display` strings are the
/// exact messages returned to callers. Infrastructure failures are carried
/// opaquely in `Internal` and are never shown to clients.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Offset query parameter failed to parse or was negative.
    #[error("offset must be a non-negative integer")]
    InvalidOffset,

    /// Limit query parameter failed to parse.
    #[error("limit must be a positive integer")]
    InvalidLimit,

    /// Price filter failed to parse as a decimal.
    #[error("priceLessThan must be a valid decimal number")]
    InvalidPrice,

    /// Price filter parsed but was negative.
    #[error("priceLessThan must be a non-negative value")]
    NegativePrice,

    /// Category creation input was incomplete.
    #[error("category code and name are required")]
    InvalidCategoryInput,

    /// Catch-all for malformed client input (bad request body, blank code).
    #[error("invalid input")]
    InvalidInput,

    /// A requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// Unclassified failure (store fault, encoding fault). Full detail is
    /// logged server-side; clients only see a generic message.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
