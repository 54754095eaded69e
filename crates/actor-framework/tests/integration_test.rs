use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// --- Test Entity ---

/// Backend shared by the actor and the assertions.
#[derive(Clone, Default)]
struct Shelf {
    slots: Arc<Mutex<HashMap<String, Vec<String>>>>,
    broken: Arc<Mutex<bool>>,
}

#[derive(Clone, Debug, PartialEq)]
struct Basket {
    items: Vec<String>,
}

#[derive(Debug)]
enum BasketAction {
    Add(String),
    Reject,
}

#[derive(Debug, thiserror::Error)]
enum BasketError {
    #[error("shelf unavailable")]
    Unavailable,
    #[error("rejected")]
    Rejected,
}

#[async_trait]
impl ActorEntity for Basket {
    type Id = String;
    type Action = BasketAction;
    type ActionResult = usize;
    type Context = Shelf;
    type Error = BasketError;

    async fn load(id: &String, ctx: &Shelf) -> Result<Self, Self::Error> {
        if *ctx.broken.lock().unwrap() {
            return Err(BasketError::Unavailable);
        }
        let items = ctx.slots.lock().unwrap().get(id).cloned().unwrap_or_default();
        // Yield so concurrent requests would interleave if the actor let them.
        tokio::task::yield_now().await;
        Ok(Self { items })
    }

    async fn save(&self, id: &String, ctx: &Shelf) -> Result<(), Self::Error> {
        ctx.slots
            .lock()
            .unwrap()
            .insert(id.clone(), self.items.clone());
        Ok(())
    }

    fn handle_action(&mut self, action: BasketAction) -> Result<usize, Self::Error> {
        match action {
            BasketAction::Add(item) => {
                self.items.push(item);
                Ok(self.items.len())
            }
            BasketAction::Reject => Err(BasketError::Rejected),
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_load_mutate_save() {
    let shelf = Shelf::default();
    let (actor, client) = ResourceActor::<Basket>::new(10);
    tokio::spawn(actor.run(shelf.clone()));

    let empty = client.get("b".into()).await.unwrap();
    assert!(empty.items.is_empty());

    let len = client
        .perform_action("b".into(), BasketAction::Add("apple".into()))
        .await
        .unwrap();
    assert_eq!(len, 1);

    let basket = client.get("b".into()).await.unwrap();
    assert_eq!(basket.items, vec!["apple".to_string()]);
    assert_eq!(shelf.slots.lock().unwrap()["b"], vec!["apple".to_string()]);
}

#[tokio::test]
async fn test_failed_action_is_not_saved() {
    let shelf = Shelf::default();
    let (actor, client) = ResourceActor::<Basket>::new(10);
    tokio::spawn(actor.run(shelf.clone()));

    let result = client.perform_action("b".into(), BasketAction::Reject).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert!(shelf.slots.lock().unwrap().get("b").is_none());
}

#[tokio::test]
async fn test_load_failure_is_reported() {
    let shelf = Shelf::default();
    *shelf.broken.lock().unwrap() = true;
    let (actor, client) = ResourceActor::<Basket>::new(10);
    tokio::spawn(actor.run(shelf));

    let err = client.get("b".into()).await.unwrap_err();
    assert!(err.to_string().contains("shelf unavailable"));
}

#[tokio::test]
async fn test_concurrent_actions_are_serialized() {
    let shelf = Shelf::default();
    let (actor, client) = ResourceActor::<Basket>::new(4);
    tokio::spawn(actor.run(shelf.clone()));

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .perform_action("b".into(), BasketAction::Add(format!("item_{i}")))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let basket = client.get("b".into()).await.unwrap();
    assert_eq!(basket.items.len(), 20, "no write may be lost");
}

#[tokio::test]
async fn test_closed_actor() {
    let (actor, client) = ResourceActor::<Basket>::new(1);
    drop(actor);

    let result = client.get("b".into()).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
