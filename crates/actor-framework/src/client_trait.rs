//! # ActorClient Trait
//!
//! Common interface for resource-specific clients, adding a default `get` built on top of a
//! generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operation.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Menu { text: String }
/// #[derive(Debug)] enum MenuAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct MenuError(String);
///
/// impl From<String> for MenuError {
///     fn from(s: String) -> Self { MenuError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Menu {
///     type Id = String;
///     type Action = MenuAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = MenuError;
///
///     async fn load(_: &String, _: &()) -> Result<Self, Self::Error> { Ok(Self::default()) }
///     fn handle_action(&mut self, action: MenuAction) -> Result<(), Self::Error> { match action {} }
/// }
///
/// struct MenuClient {
///     inner: ResourceClient<Menu>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Menu> for MenuClient {
///     type Error = MenuError;
///
///     fn inner(&self) -> &ResourceClient<Menu> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         MenuError(e.to_string())
///     }
/// }
///
/// async fn usage(client: MenuClient) {
///     // get() is provided automatically
///     let _ = client.get("menu".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current state of an entity.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
