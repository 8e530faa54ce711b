//! Validated async proxy
//!
//! Every operation in [`crate::operations`] is an [`AsyncProxy`] around an
//! [`Operation`]. The proxy owns the operation parameters and two multicast
//! delegates. [`AsyncProxy::activate`] checks preconditions, submits the
//! backend call on the client's runtime and returns immediately; the spawned
//! completion broadcasts exactly one of the two delegates.
//!
//! ```rust,ignore
//! let status = SessionOperations::describe_game_session(&client, "gsess-1")
//!     .with_on_success(|described| println!("{}", described.status))
//!     .with_on_failure(|message| eprintln!("{message}"))
//!     .activate();
//! assert!(status.is_success());
//! ```

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use tracing::{debug, error, info};

use crate::backend::{BackendResult, SessionBackend};
use crate::client::GameLiftClient;
use crate::delegate::{MulticastDelegate, SubscriptionId};

/// Immediate result of [`AsyncProxy::activate`]
///
/// `Success` only means the call was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActivateStatus {
    Success,
    NoSuccessCallback,
    NoFailCallback,
    NoBackendConnection,
}

impl ActivateStatus {
    pub fn is_success(self) -> bool {
        self == ActivateStatus::Success
    }
}

impl fmt::Display for ActivateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ActivateStatus::Success => "submitted",
            ActivateStatus::NoSuccessCallback => "no success callback bound",
            ActivateStatus::NoFailCallback => "no failure callback bound",
            ActivateStatus::NoBackendConnection => "no backend connection",
        };
        f.write_str(text)
    }
}

/// One backend operation a proxy can carry
#[async_trait]
pub trait Operation: Send + Sync + 'static {
    /// Human-readable name used in log lines
    const NAME: &'static str;

    /// Backend request built at activation
    type Request: fmt::Debug + Send + 'static;
    /// Raw backend response
    type Response: Send + 'static;
    /// Payload handed to success subscribers
    type Output: Send + Sync + 'static;

    /// Map stored parameters onto a backend request
    fn build_request(&self) -> Self::Request;

    /// Issue the backend call
    async fn submit(
        backend: &dyn SessionBackend,
        request: Self::Request,
    ) -> BackendResult<Self::Response>;

    /// Pull the success payload out of a response
    fn extract(&self, response: Self::Response) -> BackendResult<Self::Output>;
}

/// Fire-and-forget proxy for one operation
pub struct AsyncProxy<Op: Operation> {
    client: GameLiftClient,
    operation: Op,
    on_success: MulticastDelegate<Op::Output>,
    on_failure: MulticastDelegate<String>,
}

impl<Op: Operation + fmt::Debug> fmt::Debug for AsyncProxy<Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncProxy")
            .field("operation", &self.operation)
            .field("on_success", &self.on_success)
            .field("on_failure", &self.on_failure)
            .finish()
    }
}

impl<Op: Operation> AsyncProxy<Op> {
    pub fn new(client: &GameLiftClient, operation: Op) -> Self {
        Self {
            client: client.clone(),
            operation,
            on_success: MulticastDelegate::new(),
            on_failure: MulticastDelegate::new(),
        }
    }

    /// Parameters this proxy will submit
    pub fn operation(&self) -> &Op {
        &self.operation
    }

    /// Success event
    pub fn on_success(&mut self) -> &mut MulticastDelegate<Op::Output> {
        &mut self.on_success
    }

    /// Failure event; subscribers receive the backend's error message
    pub fn on_failure(&mut self) -> &mut MulticastDelegate<String> {
        &mut self.on_failure
    }

    /// Subscribe to the success event
    pub fn subscribe_success<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&Op::Output) + Send + Sync + 'static,
    {
        self.on_success.subscribe(f)
    }

    /// Subscribe to the failure event
    pub fn subscribe_failure<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&String) + Send + Sync + 'static,
    {
        self.on_failure.subscribe(f)
    }

    #[must_use]
    pub fn with_on_success<F>(mut self, f: F) -> Self
    where
        F: Fn(&Op::Output) + Send + Sync + 'static,
    {
        self.on_success.subscribe(f);
        self
    }

    #[must_use]
    pub fn with_on_failure<F>(mut self, f: F) -> Self
    where
        F: Fn(&String) + Send + Sync + 'static,
    {
        self.on_failure.subscribe(f);
        self
    }

    /// Validate, submit and return without waiting
    ///
    /// Checks run in order: backend connection, success subscriber, failure
    /// subscriber. A refused activation sends nothing. The proxy is consumed
    /// either way.
    pub fn activate(self) -> ActivateStatus {
        let Some(backend) = self.client.backend() else {
            error!(
                "GameLift client is not connected. Connect a client before activating {}.",
                Op::NAME
            );
            return ActivateStatus::NoBackendConnection;
        };

        info!("Preparing to {}...", Op::NAME);

        if !self.on_success.is_bound() {
            error!(
                "No functions were bound to the {} success delegate! Aborting activate.",
                Op::NAME
            );
            return ActivateStatus::NoSuccessCallback;
        }

        if !self.on_failure.is_bound() {
            error!(
                "No functions were bound to the {} failure delegate! Aborting activate.",
                Op::NAME
            );
            return ActivateStatus::NoFailCallback;
        }

        let request = self.operation.build_request();
        debug!("{} request: {:?}", Op::NAME, request);

        let AsyncProxy {
            client,
            operation,
            on_success,
            on_failure,
        } = self;

        client.runtime().spawn(async move {
            let outcome = Op::submit(backend.as_ref(), request)
                .await
                .and_then(|response| operation.extract(response));

            match outcome {
                Ok(output) => {
                    info!("Received {} with success outcome.", Op::NAME);
                    on_success.broadcast(&output);
                }
                Err(e) => {
                    let message = e.message().to_string();
                    error!("Received {} with failed outcome. Error: {}", Op::NAME, e);
                    on_failure.broadcast(&message);
                }
            }
        });

        ActivateStatus::Success
    }
}
