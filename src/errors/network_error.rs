//! Network-related error types.

use thiserror::Error;

/// Errors that can occur while building, wiring, or evaluating a network.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Layer requires at least one neuron")]
    EmptyLayer,

    #[error("Value count mismatch: expected {expected}, got {actual}")]
    ValueCountMismatch { expected: usize, actual: usize },

    #[error("Network is already connected")]
    AlreadyConnected,
}
