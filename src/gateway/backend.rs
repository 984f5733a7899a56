use async_trait::async_trait;

use crate::error::Result;

use super::types::{GatewayResponse, Notification};

/// The outbound send contract.
///
/// `Ok` means the gateway answered, whether it accepted or rejected the
/// push; `Err` means the send never completed. The two are never returned
/// together. Implementations must be safe for concurrent sends, since every
/// inbound request shares one instance.
#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<GatewayResponse>;
}
