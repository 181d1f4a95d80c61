//! # Framework Errors
//!
//! Common error type shared by every actor and client. Domain clients translate it back into
//! their own error enum (see [`FrameworkError::into_entity_error`]).

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover the entity's own error from an `EntityError`.
    ///
    /// Returns `Err(self)` untouched when the error is a framework condition or when the boxed
    /// error is of a different type.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("shelf is empty")]
    struct EmptyShelf;

    #[derive(Debug, thiserror::Error)]
    #[error("unrelated")]
    struct Unrelated;

    #[test]
    fn test_into_entity_error_downcasts_matching_type() {
        let err = FrameworkError::EntityError(Box::new(EmptyShelf));
        assert_eq!(err.into_entity_error::<EmptyShelf>().unwrap(), EmptyShelf);
    }

    #[test]
    fn test_into_entity_error_keeps_foreign_errors() {
        let err = FrameworkError::EntityError(Box::new(Unrelated));
        let back = err.into_entity_error::<EmptyShelf>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: unrelated");

        let closed = FrameworkError::ActorClosed.into_entity_error::<EmptyShelf>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
