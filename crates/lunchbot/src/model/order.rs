//! The day's lunch order: who picked which dish.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! so every mutation goes through a single [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](crate::order_actor::entity) for details on:
//! - How it is loaded and saved ([`Order::load_or_create`])
//! - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Age in hours after which a stored order is considered yesterday's and replaced by an empty one.
pub const FRESHNESS_HOURS: i64 = 13;

/// The daily aggregate of dish↔user selections.
///
/// `dishes` and `users` are two views of the same relation and are kept in sync by every
/// method here: `u ∈ dishes[d]` exactly when `d ∈ users[u]`, and neither map ever holds an
/// empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Creation time. Never touched by mutations.
    pub timestamp: DateTime<Utc>,
    /// Menu line → users who chose it, in selection order.
    pub dishes: HashMap<String, Vec<String>>,
    /// User → menu lines attributed to them.
    pub users: HashMap<String, Vec<String>>,
}

/// One line of the tally: a dish and who ordered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishTally {
    pub dish: String,
    pub count: usize,
    pub users: Vec<String>,
}

impl Order {
    /// Creates an empty order stamped `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now,
            dishes: HashMap::new(),
            users: HashMap::new(),
        }
    }

    /// Whether the order is older than [`FRESHNESS_HOURS`] at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.timestamp > TimeDelta::hours(FRESHNESS_HOURS)
    }

    /// Picks the order to work on from what storage returned.
    ///
    /// `None` (nothing stored, or nothing decodable) and expired orders both yield a fresh,
    /// empty order. The stale one is simply dropped; the next save overwrites it.
    pub fn load_or_create(persisted: Option<Order>, now: DateTime<Utc>) -> Self {
        match persisted {
            Some(order) if !order.is_expired(now) => order,
            Some(order) => {
                tracing::info!(created = %order.timestamp, "Discarding stale order");
                Self::new(now)
            }
            None => Self::new(now),
        }
    }

    /// Makes `dish` the only selection of `user`.
    ///
    /// Any previous selection is retracted first, so re-selecting the same dish leaves a
    /// single entry for the user.
    pub fn select(&mut self, user: &str, dish: &str) {
        self.retract(user);
        self.users
            .entry(user.to_string())
            .or_default()
            .push(dish.to_string());
        self.dishes
            .entry(dish.to_string())
            .or_default()
            .push(user.to_string());
    }

    /// Drops every selection of `user` and returns them comma-joined (empty if none).
    pub fn clear(&mut self, user: &str) -> String {
        self.retract(user).join(",")
    }

    /// Removes `user` from both maps and returns the dishes they held.
    fn retract(&mut self, user: &str) -> Vec<String> {
        let held = self.users.remove(user).unwrap_or_default();
        for dish in &held {
            let Some(picked_by) = self.dishes.get_mut(dish) else {
                continue;
            };
            if let Some(idx) = picked_by.iter().position(|u| u == user) {
                picked_by.remove(idx);
            }
            if picked_by.is_empty() {
                self.dishes.remove(dish);
            }
        }
        held
    }

    /// Per-dish counts and users, sorted by dish name.
    pub fn summarize(&self) -> Vec<DishTally> {
        let mut tally: Vec<DishTally> = self
            .dishes
            .iter()
            .map(|(dish, users)| DishTally {
                dish: dish.clone(),
                count: users.len(),
                users: users.clone(),
            })
            .collect();
        tally.sort_by(|a, b| a.dish.cmp(&b.dish));
        tally
    }

    /// Total number of selections across all dishes.
    pub fn total(&self) -> usize {
        self.dishes.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-19T11:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    /// Checks both invariants: the maps mirror each other and hold no empty lists.
    fn assert_consistent(order: &Order) {
        for (dish, users) in &order.dishes {
            assert!(!users.is_empty(), "empty dish bucket {dish}");
            for user in users {
                assert!(
                    order.users.get(user).is_some_and(|d| d.contains(dish)),
                    "{user} listed under {dish} but not the other way round"
                );
            }
        }
        for (user, dishes) in &order.users {
            assert!(!dishes.is_empty(), "empty user bucket {user}");
            for dish in dishes {
                assert!(
                    order.dishes.get(dish).is_some_and(|u| u.contains(user)),
                    "{dish} attributed to {user} but not the other way round"
                );
            }
        }
    }

    #[test]
    fn test_select_records_both_sides() {
        let mut order = Order::new(now());
        order.select("anna", "riso");

        assert_eq!(order.users["anna"], vec!["riso"]);
        assert_eq!(order.dishes["riso"], vec!["anna"]);
        assert_consistent(&order);
    }

    #[test]
    fn test_select_replaces_previous_pick() {
        let mut order = Order::new(now());
        order.select("anna", "riso");
        order.select("anna", "pasta");

        assert_eq!(order.users["anna"], vec!["pasta"]);
        assert!(!order.dishes.contains_key("riso"));
        assert_eq!(order.dishes["pasta"], vec!["anna"]);
        assert_consistent(&order);
    }

    #[test]
    fn test_reselecting_same_dish_is_idempotent() {
        let mut once = Order::new(now());
        once.select("anna", "riso");

        let mut twice = once.clone();
        twice.select("anna", "riso");

        assert_eq!(once, twice);
        assert_eq!(twice.dishes["riso"], vec!["anna"]);
    }

    #[test]
    fn test_clear_returns_prior_pick() {
        let mut order = Order::new(now());
        order.select("anna", "riso");

        assert_eq!(order.clear("anna"), "riso");
        assert!(order.users.is_empty());
        assert!(order.dishes.is_empty());
    }

    #[test]
    fn test_clear_without_selection_returns_empty() {
        let mut order = Order::new(now());
        order.select("bruno", "pasta");

        assert_eq!(order.clear("anna"), "");
        assert_eq!(order.dishes["pasta"], vec!["bruno"]);
        assert_consistent(&order);
    }

    #[test]
    fn test_clear_keeps_other_users_in_selection_order() {
        let mut order = Order::new(now());
        order.select("anna", "pasta");
        order.select("bruno", "pasta");
        order.select("carla", "pasta");

        order.clear("bruno");

        assert_eq!(order.dishes["pasta"], vec!["anna", "carla"]);
        assert_consistent(&order);
    }

    #[test]
    fn test_clear_joins_multiple_dishes() {
        let mut order = Order::new(now());
        order.users.insert("anna".into(), vec!["riso".into(), "pane".into()]);
        order.dishes.insert("riso".into(), vec!["anna".into()]);
        order.dishes.insert("pane".into(), vec!["anna".into(), "bruno".into()]);
        order.users.insert("bruno".into(), vec!["pane".into()]);

        assert_eq!(order.clear("anna"), "riso,pane");
        assert_eq!(order.dishes["pane"], vec!["bruno"]);
        assert!(!order.dishes.contains_key("riso"));
        assert_consistent(&order);
    }

    #[test]
    fn test_invariants_hold_over_mixed_sequence() {
        let mut order = Order::new(now());
        let users = ["anna", "bruno", "carla", "dario"];
        let dishes = ["pasta", "riso", "pollo arrosto"];

        for step in 0..40 {
            let user = users[step % users.len()];
            if step % 7 == 3 {
                order.clear(user);
            } else {
                order.select(user, dishes[(step * 5) % dishes.len()]);
                assert_eq!(order.users[user].len(), 1);
            }
            assert_consistent(&order);
        }
    }

    #[test]
    fn test_stale_order_is_replaced() {
        let mut stale = Order::new(now() - TimeDelta::hours(14));
        stale.select("anna", "riso");

        let order = Order::load_or_create(Some(stale), now());

        assert_eq!(order.timestamp, now());
        assert!(order.dishes.is_empty());
        assert!(order.users.is_empty());
    }

    #[test]
    fn test_recent_order_is_kept() {
        let mut recent = Order::new(now() - TimeDelta::hours(12));
        recent.select("anna", "riso");

        let order = Order::load_or_create(Some(recent.clone()), now());

        assert_eq!(order, recent);
    }

    #[test]
    fn test_order_exactly_at_freshness_limit_is_kept() {
        let mut borderline = Order::new(now() - TimeDelta::hours(FRESHNESS_HOURS));
        borderline.select("anna", "riso");

        assert!(!borderline.is_expired(now()));
        assert_eq!(Order::load_or_create(Some(borderline.clone()), now()), borderline);
        assert!(borderline.is_expired(now() + TimeDelta::seconds(1)));
    }

    #[test]
    fn test_missing_order_is_created() {
        let order = Order::load_or_create(None, now());
        assert_eq!(order, Order::new(now()));
    }

    #[test]
    fn test_summarize_counts_and_orders_users() {
        let mut order = Order::new(now());
        order.select("bruno", "riso");
        order.select("anna", "pasta");
        order.select("carla", "riso");

        let tally = order.summarize();

        assert_eq!(
            tally,
            vec![
                DishTally {
                    dish: "pasta".into(),
                    count: 1,
                    users: vec!["anna".into()],
                },
                DishTally {
                    dish: "riso".into(),
                    count: 2,
                    users: vec!["bruno".into(), "carla".into()],
                },
            ]
        );
        assert_eq!(order.total(), 3);
    }

    #[test]
    fn test_order_survives_json() {
        let mut order = Order::new(now());
        order.select("anna", "riso");

        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(back, order);
    }
}
