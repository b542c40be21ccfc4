//! # Mock Framework & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of by a running actor. Code that
//! wraps a client (a domain client, or a workflow built on several clients) can
//! be tested deterministically, including failure paths that are hard to
//! provoke with real actors.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, answers are scripted | Real state management |
//! | **Error Injection** | Easy (`return_err`) | Requires specific state |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//!
//! Expectations are consumed in FIFO order. A request that does not match the
//! next expectation (wrong kind, or wrong id) is recorded and its response
//! channel dropped, so the caller sees [`FrameworkError::ActorDropped`] and
//! [`MockClient::verify`] fails afterwards.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Item { id: u32 }
//! #[derive(Debug)] struct ItemCreate;
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug)] enum ItemAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u32; type Create = ItemCreate; type Update = ItemUpdate;
//!     type Action = ItemAction; type ActionResult = (); type Context = (); type Error = ItemError;
//!     fn from_create_params(id: u32, _: ItemCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: ItemAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Item>::new();
//!     mock.expect_get(1).return_ok(Some(Item { id: 1 }));
//!     mock.expect_get_many().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().id, 1);
//!     assert!(matches!(
//!         client.get_many(vec![1, 2]).await,
//!         Err(FrameworkError::ActorClosed)
//!     ));
//!
//!     mock.verify();
//! }
//! ```
//!
//! For inspecting the request payloads themselves, [`create_mock_client`] returns
//! the raw receiver, and the `expect_*` free functions pull typed requests off it.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// A scripted answer for one request.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    GetMany {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    UpdateMany {
        response: Result<Vec<T>, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get { .. } => "Get",
            Expectation::GetMany { .. } => "GetMany",
            Expectation::Create { .. } => "Create",
            Expectation::Update { .. } => "Update",
            Expectation::UpdateMany { .. } => "UpdateMany",
            Expectation::Delete { .. } => "Delete",
            Expectation::Action { .. } => "Action",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<X>(mutex: &Mutex<X>) -> MutexGuard<'_, X> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    unexpected: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime: the answering task is spawned here.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let unexpected = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let mismatches = unexpected.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();
                if let Err(mismatch) = answer(request, expectation) {
                    lock(&mismatches).push(mismatch);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            unexpected,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `get_many`, whatever the requested ids.
    pub fn expect_get_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::GetMany { response })
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `update` of `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects an `update_many`, whatever the batch contains.
    pub fn expect_update_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::UpdateMany { response })
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
            _response: PhantomData,
        }
    }

    /// Panics unless every expectation was consumed and no unexpected request arrived.
    pub fn verify(&self) {
        let unexpected = lock(&self.unexpected);
        if !unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", *unexpected);
        }
        let remaining = lock(&self.expectations);
        if !remaining.is_empty() {
            let kinds: Vec<&str> = remaining.iter().map(Expectation::kind).collect();
            panic!("Not all expectations were met. {} remaining: {:?}", kinds.len(), kinds);
        }
    }
}

/// Completes an expectation with the response the mock should give.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
    _response: PhantomData<fn() -> R>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Answers the request successfully with `value`.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        lock(&self.expectations).push_back(expectation);
    }

    /// Answers the request with `error`.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.make)(Err(error));
        lock(&self.expectations).push_back(expectation);
    }
}

/// Sends the scripted response if `request` matches `expectation`, otherwise
/// describes the mismatch. A mismatched request's responder is dropped.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Result<(), String> {
    match (request, expectation) {
        (
            ResourceRequest::Get { id, respond_to },
            Some(Expectation::Get { id: expected, response }),
        ) if id == expected => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::GetMany { respond_to, .. }, Some(Expectation::GetMany { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: expected, response }),
        ) if id == expected => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::UpdateMany { respond_to, .. },
            Some(Expectation::UpdateMany { response }),
        ) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: expected, response }),
        ) if id == expected => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: expected, response }),
        ) if id == expected => {
            let _ = respond_to.send(response);
        }
        (request, Some(expected)) => {
            return Err(format!(
                "{} request while expecting {}",
                request.kind(),
                expected.kind()
            ));
        }
        (request, None) => return Err(format!("{} request with no expectation", request.kind())),
    }
    Ok(())
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when a test needs to assert on the request payload itself, e.g. the
/// exact batch sent with `update_many`.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a GetMany.
pub async fn expect_get_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<T::Id>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an UpdateMany.
pub async fn expect_update_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<(T::Id, T::Update)>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::UpdateMany {
            updates,
            respond_to,
        }) => Some((updates, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Action.
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

    #[derive(Clone, Debug, PartialEq)]
    struct Account {
        id: u32,
        balance: u32,
    }

    #[derive(Debug)]
    struct AccountCreate {
        balance: u32,
    }

    #[derive(Debug)]
    struct AccountUpdate {
        balance: u32,
    }

    #[derive(Debug)]
    enum AccountAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Account error")]
    struct AccountError;

    #[async_trait]
    impl ActorEntity for Account {
        type Id = u32;
        type Create = AccountCreate;
        type Update = AccountUpdate;
        type Action = AccountAction;
        type ActionResult = ();
        type Context = ();
        type Error = AccountError;

        fn from_create_params(id: u32, params: AccountCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                balance: params.balance,
            })
        }

        async fn on_update(
            &mut self,
            update: AccountUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            self.balance = update.balance;
            Ok(())
        }

        async fn handle_action(
            &mut self,
            _action: AccountAction,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_update_many_payload() {
        let (client, mut receiver) = create_mock_client::<Account>(10);

        let task = tokio::spawn(async move {
            client
                .update_many(vec![(1, AccountUpdate { balance: 5 })])
                .await
        });

        let (updates, responder) = expect_update_many(&mut receiver)
            .await
            .expect("Expected UpdateMany request");
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, 1);
        assert_eq!(updates[0].1.balance, 5);
        responder
            .send(Ok(vec![Account { id: 1, balance: 5 }]))
            .unwrap();

        let updated = task.await.unwrap().unwrap();
        assert_eq!(updated, vec![Account { id: 1, balance: 5 }]);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_create().return_ok(Account { id: 1, balance: 10 });
        mock.expect_get(1).return_ok(Some(Account { id: 1, balance: 10 }));
        mock.expect_delete(1).return_ok(());

        let client = mock.client();
        let created = client.create(AccountCreate { balance: 10 }).await.unwrap();
        assert_eq!(created.id, 1);
        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched, Some(Account { id: 1, balance: 10 }));
        client.delete(1).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_is_dropped_and_reported() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_get(1).return_ok(None);

        let client = mock.client();
        let result = client.get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err(), "verify should fail after a mismatched id");
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_fails_on_unconsumed_expectation() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_update_many().return_ok(Vec::new());
        mock.verify();
    }
}
