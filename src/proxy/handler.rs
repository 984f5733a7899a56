use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::gateway::Notification;
use crate::server::AppState;

use super::headers::{
    header_value, int_or_default, APNS_COLLAPSE_ID, APNS_EXPIRATION, APNS_ID, APNS_PRIORITY,
    APNS_PUSH_TYPE, APNS_TOPIC,
};

/// Outcome of one proxied push, as written back to the HTTP caller.
#[derive(Debug, PartialEq, Eq)]
pub enum ProxyResponse {
    /// The gateway completed the send; its status and reason are relayed
    /// verbatim, accepted or rejected alike.
    Relayed { status: StatusCode, reason: String },
    /// The request body could not be read; the gateway was never contacted.
    BadRequest(String),
    /// The send never completed. The handler writes no status or body of
    /// its own and the listener's default write path applies.
    Unwritten,
}

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        match self {
            ProxyResponse::Relayed { status, reason } => (status, reason).into_response(),
            ProxyResponse::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ProxyResponse::Unwritten => ().into_response(),
        }
    }
}

/// Relay one push to the gateway.
///
/// Translation only: no retries, a single send attempt, no deadline beyond
/// the listener's own.
#[tracing::instrument(name = "proxy.relay_push", skip(state, headers, body), fields(device_token = %device_token))]
pub async fn relay_push(
    State(state): State<AppState>,
    Path(device_token): Path<String>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ProxyResponse {
    let payload = match body {
        Ok(bytes) => bytes,
        Err(rejection) => return ProxyResponse::BadRequest(rejection.body_text()),
    };

    let notification = Notification {
        device_token,
        apns_id: header_value(&headers, APNS_ID),
        collapse_id: header_value(&headers, APNS_COLLAPSE_ID),
        expiration: int_or_default(&headers, APNS_EXPIRATION),
        priority: int_or_default(&headers, APNS_PRIORITY),
        push_type: header_value(&headers, APNS_PUSH_TYPE),
        topic: header_value(&headers, APNS_TOPIC),
        payload,
    };

    match state.gateway.send(&notification).await {
        Ok(response) => {
            tracing::debug!(
                apns_id = %response.apns_id,
                status = %response.status.as_u16(),
                reason = %response.reason,
                "Push relayed"
            );
            ProxyResponse::Relayed {
                status: response.status,
                reason: response.reason,
            }
        }
        Err(err) => {
            tracing::debug!(error = %err, "Failed to send push");
            ProxyResponse::Unwritten
        }
    }
}
