//! Error types for catalog decoding and encoding.

use std::io;

use thiserror::Error;

/// Primary error type for catalog boundary operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Payload was not a mapping of categories to item mappings.
    #[error("invalid catalog payload")]
    Decode {
        /// Source JSON error.
        source: serde_json::Error,
    },
    /// Catalog could not be rendered back to JSON.
    #[error("failed to encode catalog")]
    Encode {
        /// Source JSON error.
        source: serde_json::Error,
    },
    /// Reading the payload failed.
    #[error("failed to read catalog")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Source IO error.
        source: io::Error,
    },
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
