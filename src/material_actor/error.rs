//! Error types for the Material actor.

use thiserror::Error;

/// Errors that can occur during ledger operations. None of them changes the forest.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MaterialError {
    /// No node in the forest carries this id.
    #[error("Material not found: {0}")]
    NotFound(String),

    /// Groups aggregate their children and have no ledger of their own.
    #[error("Material {0} is a group; post to one of its children")]
    GroupNotPostable(String),

    #[error("Transaction quantity must be positive")]
    InvalidQuantity,

    /// Unit prices must be finite and non-negative.
    #[error("Invalid unit price: {0}")]
    InvalidUnitPrice(f64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
