//! ActorEntity trait implementation for the Order domain type.
//!
//! Ties the pure [`Order`] ledger to the persistence port: every action loads the stored
//! order (or starts a new one), applies the change and writes the whole order back.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::model::Order;
use crate::store::{Persistence, StoreError};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = Persistence;
    type Error = OrderError;

    /// Loads the stored order, falling back to a fresh one.
    ///
    /// Missing and undecodable orders are replaced; only a storage failure is an error.
    async fn load(id: &String, store: &Persistence) -> Result<Self, Self::Error> {
        let persisted = match store.get::<Order>(id).await {
            Ok(order) => Some(order),
            Err(StoreError::NotFound(_)) => {
                debug!(%id, "No stored order");
                None
            }
            Err(StoreError::Decode { key, reason }) => {
                warn!(%key, %reason, "Stored order is corrupt, starting a new one");
                None
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Order::load_or_create(persisted, Utc::now()))
    }

    async fn save(&self, id: &String, store: &Persistence) -> Result<(), Self::Error> {
        store.set(id, self).await.map_err(OrderError::from)
    }

    /// Handles custom actions for the Order entity.
    ///
    /// # Actions
    /// - `Select`: retracts the user's previous pick and records the new one
    /// - `Clear`: retracts the user's pick, returning what it was
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::Select { user, dish } => {
                self.select(&user, &dish);
                Ok(OrderActionResult::Select(dish))
            }
            OrderAction::Clear { user } => Ok(OrderActionResult::Clear(self.clear(&user))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ORDER_KEY;
    use chrono::TimeDelta;

    #[tokio::test]
    async fn test_load_without_stored_order_is_empty() {
        let store = Persistence::in_memory();
        let order = Order::load(&ORDER_KEY.to_string(), &store).await.unwrap();
        assert!(order.dishes.is_empty());
        assert!(Utc::now() - order.timestamp < TimeDelta::minutes(1));
    }

    #[tokio::test]
    async fn test_load_recovers_from_corrupt_order() {
        let store = Persistence::in_memory();
        store.set(ORDER_KEY, "not an order").await.unwrap();

        let order = Order::load(&ORDER_KEY.to_string(), &store).await.unwrap();
        assert!(order.users.is_empty());
    }

    #[tokio::test]
    async fn test_load_discards_yesterdays_order() {
        let store = Persistence::in_memory();
        let mut stale = Order::new(Utc::now() - TimeDelta::hours(14));
        stale.select("anna", "riso");
        store.set(ORDER_KEY, &stale).await.unwrap();

        let order = Order::load(&ORDER_KEY.to_string(), &store).await.unwrap();
        assert!(order.dishes.is_empty());

        // Nothing is written back on load.
        let still_stored: Order = store.get(ORDER_KEY).await.unwrap();
        assert_eq!(still_stored, stale);
    }

    #[test]
    fn test_handle_action_select_then_clear() {
        let mut order = Order::new(Utc::now());
        let selected = order
            .handle_action(OrderAction::Select {
                user: "anna".into(),
                dish: "riso".into(),
            })
            .unwrap();
        assert_eq!(selected, OrderActionResult::Select("riso".into()));

        let cleared = order
            .handle_action(OrderAction::Clear {
                user: "anna".into(),
            })
            .unwrap();
        assert_eq!(cleared, OrderActionResult::Clear("riso".into()));
        assert!(order.dishes.is_empty());
    }
}
