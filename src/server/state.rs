use std::sync::Arc;

use crate::gateway::PushGateway;

/// Shared application state.
///
/// The gateway client is constructed once at startup and injected here;
/// every request task clones the state and shares the one client. Nothing
/// in it is mutated after construction.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn PushGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn PushGateway>) -> Self {
        Self { gateway }
    }
}
