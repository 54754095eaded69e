//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of by an actor. It lets you unit-test the logic *around* a
//! client (reply formatting, error mapping, command routing) without a backend.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real load / save cycles |
//! | **Use Case** | Unit testing logic *around* the client | Testing the entity or full system |
//! | **Error Injection** | Easy (`return_err`) | Needs a failing backend |
//!
//! ## Client Logic Test
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, Default, PartialEq)] struct Tally { votes: u32 }
//! #[derive(Debug)] enum TallyAction { Vote }
//! #[derive(Debug, thiserror::Error)] #[error("tally error")] struct TallyError;
//!
//! #[async_trait]
//! impl ActorEntity for Tally {
//!     type Id = String; type Action = TallyAction; type ActionResult = u32;
//!     type Context = (); type Error = TallyError;
//!     async fn load(_: &String, _: &()) -> Result<Self, Self::Error> { Ok(Self::default()) }
//!     fn handle_action(&mut self, _: TallyAction) -> Result<u32, Self::Error> { Ok(0) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tally>::new();
//!     mock.expect_action("tally".into()).return_ok(7);
//!     mock.expect_get("tally".into()).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.perform_action("tally".into(), TallyAction::Vote).await.unwrap(), 7);
//!     assert!(matches!(client.get("tally".into()).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Channel-Level Helpers
//!
//! [`create_mock_client`] returns a client plus the raw receiver, and [`expect_get`] /
//! [`expect_action`] pull the next request off it so a test can inspect the payload and
//! answer through the embedded responder.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<T, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered; a request that does not
/// match the next expectation panics the mock task, which surfaces as `ActorDropped` on
/// the caller side.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, _id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, _id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get { response: Ok(value) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get { response: Err(error) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action { response: Ok(result) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action { response: Err(error) });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Useful when a test wants to look at the request payload itself, for example to assert
/// which action a client method sends.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Ballot {
        picks: Vec<String>,
    }

    #[derive(Debug)]
    enum BallotAction {
        Pick(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Ballot error")]
    struct BallotError;

    #[async_trait]
    impl ActorEntity for Ballot {
        type Id = String;
        type Action = BallotAction;
        type ActionResult = usize;
        type Context = ();
        type Error = BallotError;

        async fn load(_id: &String, _ctx: &()) -> Result<Self, Self::Error> {
            Ok(Self::default())
        }

        fn handle_action(&mut self, action: BallotAction) -> Result<usize, Self::Error> {
            match action {
                BallotAction::Pick(p) => self.picks.push(p),
            }
            Ok(self.picks.len())
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Ballot>(10);

        let action_task = tokio::spawn(async move {
            client
                .perform_action("ballot".to_string(), BallotAction::Pick("pasta".into()))
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "ballot");
        assert!(matches!(action, BallotAction::Pick(ref p) if p == "pasta"));
        responder.send(Ok(1)).unwrap();

        let result = action_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Ballot>::new();

        mock.expect_action("ballot".into()).return_ok(1);
        mock.expect_get("ballot".into()).return_ok(Ballot {
            picks: vec!["pasta".into()],
        });

        let client = mock.client();

        let count = client
            .perform_action("ballot".into(), BallotAction::Pick("pasta".into()))
            .await
            .unwrap();
        assert_eq!(count, 1);

        let fetched = client.get("ballot".into()).await.unwrap();
        assert_eq!(fetched.picks, vec!["pasta".to_string()]);

        mock.verify();
    }
}
