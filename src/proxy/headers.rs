use std::str::FromStr;

use axum::http::HeaderMap;

pub const APNS_ID: &str = "apns-id";
pub const APNS_COLLAPSE_ID: &str = "apns-collapse-id";
pub const APNS_PRIORITY: &str = "apns-priority";
pub const APNS_EXPIRATION: &str = "apns-expiration";
pub const APNS_PUSH_TYPE: &str = "apns-push-type";
pub const APNS_TOPIC: &str = "apns-topic";

/// Numeric header, parsed leniently: a missing, non-ASCII, or non-numeric
/// value falls back to the type's zero instead of failing the request.
pub fn int_or_default<T>(headers: &HeaderMap, name: &str) -> T
where
    T: FromStr + Default,
{
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// String header, copied verbatim. A missing or empty value yields `None`,
/// which keeps the header off the outbound request entirely.
pub fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}
