use crate::common::context::Context;
use crate::common::store::{PgStore, Store};
use crate::events;
use crate::models::invocation::{Invocation, InvocationResponse};
use std::sync::Arc;

/// Configuration injected into the service at construction time.
#[derive(Debug, Default, Clone)]
pub struct ServiceConfig {
    /// Required by the list and create operations, unused by preflight.
    pub store_connection_string: Option<String>,
}

#[derive(Clone)]
pub struct AppState<S = PgStore> {
    pub config: Arc<ServiceConfig>,
    pub store: S,
}

impl<S: Store> AppState<S> {
    pub fn new(config: ServiceConfig, store: S) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Runs a single invocation to completion. Never fails: every error is
    /// rendered into the returned response.
    pub async fn handle(&self, invocation: Invocation) -> InvocationResponse {
        events::handle_request(self, invocation).await
    }
}

impl<S: Store> Context for AppState<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_connection_string(&self) -> Option<&str> {
        self.config
            .store_connection_string
            .as_deref()
            .filter(|dsn| !dsn.is_empty())
    }
}
