//! Inbound request translation: header parsing and the relay handler.

mod handler;
mod headers;

pub use handler::{relay_push, ProxyResponse};
pub use headers::{header_value, int_or_default};
