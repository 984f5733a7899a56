use std::time::Duration;

use async_trait::async_trait;
use reqwest::Identity;
use serde::Deserialize;

use crate::error::{ProxyError, Result};

use super::backend::PushGateway;
use super::types::{GatewayResponse, Notification};

/// Upstream request timeout. Lives inside the transport collaborator; the
/// proxy handler itself imposes no deadline of its own.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Which APNs endpoint all pushes from this process go to. Fixed at client
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Development,
    Production,
}

impl Endpoint {
    pub fn base_url(self) -> &'static str {
        match self {
            Endpoint::Development => "https://api.development.push.apple.com",
            Endpoint::Production => "https://api.push.apple.com",
        }
    }
}

/// Rejection body returned by APNs, e.g. `{"reason":"Unregistered"}`.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    reason: String,
}

/// HTTP/2 client for one APNs endpoint.
///
/// Connection management, multiplexing, and TLS are `reqwest`'s concern;
/// this type only translates a [`Notification`] into the gateway's request
/// shape and the gateway's answer into a [`GatewayResponse`].
pub struct ApnsClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl ApnsClient {
    /// Build a client bound to `endpoint`, optionally presenting a client
    /// certificate identity.
    pub fn new(endpoint: Endpoint, identity: Option<Identity>) -> Result<Self> {
        // APNs speaks HTTP/2 only.
        let mut builder = reqwest::Client::builder()
            .http2_prior_knowledge()
            .timeout(REQUEST_TIMEOUT);

        if let Some(identity) = identity {
            builder = builder.identity(identity);
        }

        let http = builder
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    fn device_url(&self, device_token: &str) -> String {
        format!("{}/3/device/{}", self.endpoint.base_url(), device_token)
    }
}

#[async_trait]
impl PushGateway for ApnsClient {
    async fn send(&self, notification: &Notification) -> Result<GatewayResponse> {
        let mut request = self
            .http
            .post(self.device_url(&notification.device_token))
            .header("apns-expiration", notification.expiration.to_string())
            .body(notification.payload.clone());

        // The remaining headers are only meaningful when set; the gateway
        // treats absence as its default.
        if notification.priority > 0 {
            request = request.header("apns-priority", notification.priority.to_string());
        }
        if let Some(apns_id) = &notification.apns_id {
            request = request.header("apns-id", apns_id.as_str());
        }
        if let Some(collapse_id) = &notification.collapse_id {
            request = request.header("apns-collapse-id", collapse_id.as_str());
        }
        if let Some(push_type) = &notification.push_type {
            request = request.header("apns-push-type", push_type.as_str());
        }
        if let Some(topic) = &notification.topic {
            request = request.header("apns-topic", topic.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProxyError::Transport(e.to_string()))?;

        let status = response.status();
        let apns_id = response
            .headers()
            .get("apns-id")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|e| ProxyError::Transport(e.to_string()))?;

        // Accepted pushes come back with an empty body; rejections carry a
        // JSON reason. Anything else is treated like a failed send.
        let reason = if body.is_empty() {
            String::new()
        } else {
            serde_json::from_str::<RejectionBody>(&body)
                .map_err(|e| ProxyError::MalformedResponse(e.to_string()))?
                .reason
        };

        Ok(GatewayResponse {
            apns_id,
            status,
            reason,
        })
    }
}
