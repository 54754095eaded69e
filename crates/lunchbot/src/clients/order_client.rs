//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and always addresses the single daily order.
use crate::model::Order;
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::store::ORDER_KEY;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// The order as it stands now. A stale or missing one comes back empty.
    #[instrument(skip(self))]
    pub async fn current_order(&self) -> Result<Order, OrderError> {
        self.get(ORDER_KEY.to_string()).await
    }

    /// Record `dish` as the selection of `user`, replacing any previous one.
    ///
    /// Returns the dish as recorded.
    #[instrument(skip(self))]
    pub async fn select_dish(&self, user: &str, dish: &str) -> Result<String, OrderError> {
        debug!("Selecting dish");
        let action = OrderAction::Select {
            user: user.to_string(),
            dish: dish.to_string(),
        };
        match self.inner.perform_action(ORDER_KEY.to_string(), action).await {
            Ok(OrderActionResult::Select(dish)) => Ok(dish),
            Ok(_) => unreachable!("Select action must return Select result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Drop the selection of `user`.
    ///
    /// Returns what they had, comma-joined, or an empty string.
    #[instrument(skip(self))]
    pub async fn clear_selection(&self, user: &str) -> Result<String, OrderError> {
        debug!("Clearing selection");
        let action = OrderAction::Clear {
            user: user.to_string(),
        };
        match self.inner.perform_action(ORDER_KEY.to_string(), action).await {
            Ok(OrderActionResult::Clear(previous)) => Ok(previous),
            Ok(_) => unreachable!("Clear action must return Clear result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
