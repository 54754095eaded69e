use crate::clients::OrderClient;
use crate::commands::{CommandRouter, ExportSettings};
use crate::order_actor;
use crate::store::Persistence;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running bot core: the Order actor and the persistence port it writes through.
///
/// # Example
///
/// ```ignore
/// let system = LunchSystem::new(Persistence::in_memory());
/// let router = system.router(ExportSettings::default());
/// let reply = router.handle("anna", "per me riso").await;
///
/// drop(router);
/// system.shutdown().await?;
/// ```
pub struct LunchSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Storage shared by the actor and the menu/admin commands
    pub persistence: Persistence,

    handles: Vec<JoinHandle<()>>,
}

impl LunchSystem {
    /// Spawns the Order actor with `persistence` as its context.
    pub fn new(persistence: Persistence) -> Self {
        let (order_actor, order_resource_client) = order_actor::new();
        let order_client = OrderClient::new(order_resource_client);
        let order_handle = tokio::spawn(order_actor.run(persistence.clone()));

        info!("Lunch system started");
        Self {
            order_client,
            persistence,
            handles: vec![order_handle],
        }
    }

    /// A command router wired to this system.
    pub fn router(&self, export: ExportSettings) -> CommandRouter {
        CommandRouter::new(self.order_client.clone(), self.persistence.clone(), export)
    }

    /// Closes the actor's channel and waits for it to drain.
    ///
    /// Routers and client clones handed out earlier keep the channel open, so drop them
    /// first or this waits forever.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down lunch system...");
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Lunch system shutdown complete.");
        Ok(())
    }
}
