//! Gateway client factory.

use std::path::Path;
use std::sync::Arc;

use reqwest::Identity;

use crate::config::GatewayConfig;
use crate::error::{ProxyError, Result};

use super::backend::PushGateway;
use super::client::{ApnsClient, Endpoint};

impl GatewayConfig {
    /// The endpoint this configuration binds the client to.
    pub fn endpoint(&self) -> Endpoint {
        if self.development {
            Endpoint::Development
        } else {
            Endpoint::Production
        }
    }
}

/// Create the process-wide gateway client.
///
/// Called once at startup, before the listener binds; an error here is
/// fatal to the process.
pub fn create_gateway(config: &GatewayConfig) -> Result<Arc<dyn PushGateway>> {
    let identity = resolve_identity(config.certificate.as_deref(), config.key.as_deref())?;

    let endpoint = config.endpoint();
    if endpoint == Endpoint::Development {
        tracing::info!("Using development endpoint");
    }

    Ok(Arc::new(ApnsClient::new(endpoint, identity)?))
}

/// Resolve the optional client certificate identity.
///
/// Only a complete certificate/key pair yields an identity. A lone
/// certificate or a lone key is ignored and the client falls back to
/// whatever authentication the gateway otherwise accepts, exactly as if
/// neither had been supplied.
fn resolve_identity(certificate: Option<&Path>, key: Option<&Path>) -> Result<Option<Identity>> {
    let (cert_path, key_path) = match (certificate, key) {
        (Some(cert), Some(key)) => (cert, key),
        _ => return Ok(None),
    };

    tracing::info!(
        certificate = %cert_path.display(),
        key = %key_path.display(),
        "Using certificate identity"
    );

    let cert_pem = std::fs::read(cert_path).map_err(|e| {
        ProxyError::Credential(format!(
            "failed to read certificate {}: {e}",
            cert_path.display()
        ))
    })?;
    let key_pem = std::fs::read(key_path)
        .map_err(|e| ProxyError::Credential(format!("failed to read key {}: {e}", key_path.display())))?;

    let identity = Identity::from_pkcs8_pem(&cert_pem, &key_pem)
        .map_err(|e| ProxyError::Credential(format!("invalid certificate/key pair: {e}")))?;

    Ok(Some(identity))
}
