//! # Mock Products API
//!
//! A scripted [`ProductApi`] for tests. Queue the responses the service should give,
//! in call order, run the code under test, then [`verify`](MockProductApi::verify)
//! that every expectation was consumed and nothing unexpected was called.
//!
//! ```ignore
//! let api = MockProductApi::new();
//! api.expect_create().return_ok();
//! api.expect_list().return_ok(vec![widget]);
//!
//! // ... drive the controller ...
//!
//! assert_eq!(api.count(ApiCallKind::List), 1);
//! api.verify();
//! ```
//!
//! A call that does not match the front of the queue is answered with
//! [`ApiError::Transport`] and reported by `verify()`, so a wrong call fails the
//! test instead of hanging the controller.

use super::{ApiError, ProductApi};
use crate::model::{Product, ProductDraft, ProductId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Kind of API call, used to match expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCallKind {
    List,
    Create,
    Update,
    Delete,
}

/// A call the mock received, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
    Delete(ProductId),
}

impl ApiCall {
    pub fn kind(&self) -> ApiCallKind {
        match self {
            ApiCall::List => ApiCallKind::List,
            ApiCall::Create(_) => ApiCallKind::Create,
            ApiCall::Update(..) => ApiCallKind::Update,
            ApiCall::Delete(_) => ApiCallKind::Delete,
        }
    }
}

enum Reply {
    Products(Result<Vec<Product>, ApiError>),
    Unit(Result<(), ApiError>),
}

struct Expectation {
    kind: ApiCallKind,
    delay: Option<Duration>,
    reply: Reply,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<ApiCall>,
    mismatches: Vec<String>,
}

/// Scripted, cloneable Products API. Clones share one script.
#[derive(Clone, Default)]
pub struct MockProductApi {
    state: Arc<Mutex<MockState>>,
}

impl MockProductApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list` call.
    pub fn expect_list(&self) -> ListExpectationBuilder {
        ListExpectationBuilder {
            state: self.state.clone(),
            delay: None,
        }
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> UnitExpectationBuilder {
        self.unit(ApiCallKind::Create)
    }

    /// Expects an `update` call.
    pub fn expect_update(&self) -> UnitExpectationBuilder {
        self.unit(ApiCallKind::Update)
    }

    /// Expects a `delete` call.
    pub fn expect_delete(&self) -> UnitExpectationBuilder {
        self.unit(ApiCallKind::Delete)
    }

    fn unit(&self, kind: ApiCallKind) -> UnitExpectationBuilder {
        UnitExpectationBuilder {
            state: self.state.clone(),
            kind,
            delay: None,
        }
    }

    /// Every call received so far, in arrival order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of calls of one kind received so far.
    pub fn count(&self, kind: ApiCallKind) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| c.kind() == kind)
            .count()
    }

    /// Panics unless every expectation was consumed by a matching call.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.mismatches.is_empty() {
            panic!("Unexpected API calls: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            let pending: Vec<_> = state.expectations.iter().map(|e| e.kind).collect();
            panic!("Not all expectations were met. Remaining: {:?}", pending);
        }
    }

    /// Records `call` and pops the reply scripted for it.
    async fn answer(&self, call: ApiCall) -> Reply {
        let expectation = {
            let mut state = self.state.lock().unwrap();
            let kind = call.kind();
            state.calls.push(call);
            let expected = state.expectations.front().map(|e| e.kind);
            if expected == Some(kind) {
                state.expectations.pop_front()
            } else {
                state
                    .mismatches
                    .push(format!("got {kind:?}, expected {expected:?}"));
                None
            }
        };

        let Some(expectation) = expectation else {
            return Reply::Unit(Err(ApiError::Transport("unexpected call".to_string())));
        };
        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        expectation.reply
    }
}

#[async_trait]
impl ProductApi for MockProductApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        match self.answer(ApiCall::List).await {
            Reply::Products(result) => result,
            Reply::Unit(result) => result.map(|_| Vec::new()),
        }
    }

    async fn create(&self, draft: &ProductDraft) -> Result<(), ApiError> {
        unit_reply(self.answer(ApiCall::Create(draft.clone())).await)
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<(), ApiError> {
        unit_reply(self.answer(ApiCall::Update(id, draft.clone())).await)
    }

    async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        unit_reply(self.answer(ApiCall::Delete(id)).await)
    }
}

fn unit_reply(reply: Reply) -> Result<(), ApiError> {
    match reply {
        Reply::Unit(result) => result,
        Reply::Products(result) => result.map(|_| ()),
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder {
    state: Arc<Mutex<MockState>>,
    delay: Option<Duration>,
}

impl ListExpectationBuilder {
    /// Holds the reply back for `delay` before answering.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, products: Vec<Product>) {
        self.push(Ok(products));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, result: Result<Vec<Product>, ApiError>) {
        self.state.lock().unwrap().expectations.push_back(Expectation {
            kind: ApiCallKind::List,
            delay: self.delay,
            reply: Reply::Products(result),
        });
    }
}

/// Builder for `create`, `update` and `delete` expectations.
pub struct UnitExpectationBuilder {
    state: Arc<Mutex<MockState>>,
    kind: ApiCallKind,
    delay: Option<Duration>,
}

impl UnitExpectationBuilder {
    /// Holds the reply back for `delay` before answering.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, result: Result<(), ApiError>) {
        self.state.lock().unwrap().expectations.push_back(Expectation {
            kind: self.kind,
            delay: self.delay,
            reply: Reply::Unit(result),
        });
    }
}
