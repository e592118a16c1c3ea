//! Catalog error types.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures of the in-memory catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No record exists under the given id
    #[error("no book with id {id}")]
    NotFound { id: u32 },

    /// A record already exists under the given id
    #[error("book {id} already present")]
    DuplicateId { id: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::NotFound { id: 42 }.to_string(),
            "no book with id 42"
        );
        assert_eq!(
            CatalogError::DuplicateId { id: 1 }.to_string(),
            "book 1 already present"
        );
    }
}
