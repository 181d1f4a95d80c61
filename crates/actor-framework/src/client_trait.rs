//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`, `list`,
//! `delete` and loading-flag methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard operations.
///
/// Implementors only say how to reach the inner [`ResourceClient`] and how to translate a
/// [`FrameworkError`] into their own error enum.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)]
/// struct Bin { id: u32 }
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct BinError(String);
///
/// #[async_trait]
/// impl ActorEntity for Bin {
///     type Id = u32;
///     type Update = Infallible;
///     type Action = Infallible;
///     type ActionResult = ();
///     type Context = ();
///     type Error = BinError;
///
///     fn id(&self) -> &u32 { &self.id }
///     async fn on_update(&mut self, update: Infallible, _: &()) -> Result<(), BinError> { match update {} }
///     async fn handle_action(&mut self, action: Infallible, _: &()) -> Result<(), BinError> { match action {} }
/// }
///
/// struct BinClient {
///     inner: ResourceClient<Bin>,
/// }
///
/// impl ActorClient<Bin> for BinClient {
///     type Error = BinError;
///
///     fn inner(&self) -> &ResourceClient<Bin> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> BinError {
///         BinError(e.to_string())
///     }
/// }
///
/// async fn usage(client: BinClient) {
///     // get(), list() and delete() come for free
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID (nested entities included).
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Snapshot of the whole collection, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a top-level entity by ID. Returns `false` when there was nothing to delete.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        let removed = self.inner().delete(id).await.map_err(Self::map_error)?;
        Ok(removed.is_some())
    }

    #[tracing::instrument(skip(self))]
    async fn set_loading(&self, loading: bool) -> Result<(), Self::Error> {
        self.inner()
            .set_loading(loading)
            .await
            .map_err(Self::map_error)
    }

    async fn is_loading(&self) -> Result<bool, Self::Error> {
        self.inner().is_loading().await.map_err(Self::map_error)
    }
}
