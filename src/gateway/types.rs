use bytes::Bytes;
use reqwest::StatusCode;

/// One push, bound for a single device.
///
/// Built exactly once per inbound request and never mutated or shared
/// across requests afterwards.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Hexadecimal device token, taken from the request path unvalidated.
    /// The gateway is the source of truth for token validity.
    pub device_token: String,
    /// Caller-supplied idempotency / tracing identifier.
    pub apns_id: Option<String>,
    /// Coalesces multiple pushes into one visible alert on the device.
    pub collapse_id: Option<String>,
    /// Absolute expiry as unix seconds. 0 means deliver once, do not store.
    pub expiration: i64,
    /// Delivery priority hint. 0 leaves the choice to the gateway.
    pub priority: u32,
    /// Delivery category (alert, background, voip, ...), passed through opaquely.
    pub push_type: Option<String>,
    /// App bundle identifier the push is scoped to.
    pub topic: Option<String>,
    /// The inbound request body, forwarded byte-for-byte.
    pub payload: Bytes,
}

/// The gateway's verdict for one completed send.
///
/// Present for rejections as well as acceptances; a send that never
/// completed is an error, not a response.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    /// Identifier assigned (or echoed back) by the gateway.
    pub apns_id: String,
    /// The gateway's HTTP status.
    pub status: StatusCode,
    /// Machine-readable rejection reason; empty when the push was accepted.
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_payload_is_untouched() {
        let raw = br#"{"aps":{"alert":"hi"},  "custom": 1}"#;
        let notification = Notification {
            device_token: "abc123".to_string(),
            apns_id: None,
            collapse_id: None,
            expiration: 0,
            priority: 0,
            push_type: None,
            topic: None,
            payload: Bytes::from_static(raw),
        };
        assert_eq!(notification.payload.as_ref(), raw);
    }
}
