//! Error types for abacus
//!
//! The error surface is deliberately small. The only failing operations in
//! the crate are `Stack::pop` and `Stack::peek` on an empty stack; absence
//! (a list value that is not present, a traversal start the graph has never
//! seen) is an expected outcome reported through return values, not errors.

use thiserror::Error;

/// Errors that can occur during abacus operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbacusError {
    /// An operation that needs at least one element was invoked on a
    /// container holding none.
    #[error("{operation} from empty {container}")]
    EmptyContainer {
        container: &'static str,
        operation: &'static str,
    },
}

impl AbacusError {
    /// Create an error for an operation on an empty container
    pub fn empty_container(container: &'static str, operation: &'static str) -> Self {
        AbacusError::EmptyContainer {
            container,
            operation,
        }
    }
}

pub type Result<T> = std::result::Result<T, AbacusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_container_display() {
        let err = AbacusError::empty_container("stack", "pop");
        assert_eq!(err.to_string(), "pop from empty stack");
    }

    #[test]
    fn test_empty_container_equality() {
        assert_eq!(
            AbacusError::empty_container("stack", "peek"),
            AbacusError::EmptyContainer {
                container: "stack",
                operation: "peek",
            }
        );
    }
}
