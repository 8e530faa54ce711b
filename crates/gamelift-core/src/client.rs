//! Shared backend client handle
//!
//! One [`GameLiftClient`] is normally created at startup and handed by
//! reference to every proxy factory. It owns the backend and the tokio
//! runtime handle completions are spawned on. [`GameLiftClient::shutdown`]
//! releases the backend; proxies activated afterwards report
//! [`ActivateStatus::NoBackendConnection`](crate::ActivateStatus::NoBackendConnection).

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::backend::SessionBackend;
use crate::config::Profile;
use crate::error::{CoreError, Result};

struct ClientInner {
    backend: RwLock<Option<Arc<dyn SessionBackend>>>,
    runtime: Handle,
}

/// Cloneable handle to the session backend
#[derive(Clone)]
pub struct GameLiftClient {
    inner: Arc<ClientInner>,
}

impl fmt::Debug for GameLiftClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameLiftClient")
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl GameLiftClient {
    /// Wrap an existing backend
    pub fn new(backend: Arc<dyn SessionBackend>, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                backend: RwLock::new(Some(backend)),
                runtime,
            }),
        }
    }

    /// A handle with no backend; every activation is refused
    pub fn disconnected(runtime: Handle) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                backend: RwLock::new(None),
                runtime,
            }),
        }
    }

    /// Build a client for `profile` on the current tokio runtime
    ///
    /// Without the `http-backend` feature the returned handle is
    /// disconnected.
    pub async fn connect(profile: &Profile) -> Result<Self> {
        profile.validate()?;
        let runtime = Handle::try_current().map_err(|e| CoreError::NoRuntime(e.to_string()))?;

        #[cfg(feature = "http-backend")]
        {
            let endpoint = profile.endpoint_url();
            let backend = crate::backend::HttpBackend::new(&endpoint, profile.timeout())?;
            info!("GameLift client connected to {}", endpoint);
            Ok(Self::new(Arc::new(backend), runtime))
        }
        #[cfg(not(feature = "http-backend"))]
        {
            warn!("Built without the http-backend feature; GameLift client is disconnected");
            Ok(Self::disconnected(runtime))
        }
    }

    /// Current backend, if connected
    pub fn backend(&self) -> Option<Arc<dyn SessionBackend>> {
        self.inner
            .backend
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_connected(&self) -> bool {
        self.inner
            .backend
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Runtime completions are spawned on
    pub fn runtime(&self) -> &Handle {
        &self.inner.runtime
    }

    /// Release the backend
    ///
    /// Calls already submitted keep their own reference and complete
    /// normally.
    pub fn shutdown(&self) {
        let previous = self
            .inner
            .backend
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            info!("GameLift client shut down");
        } else {
            warn!("GameLift client shut down twice");
        }
    }
}
