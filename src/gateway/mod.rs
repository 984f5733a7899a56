//! The upstream APNs client: envelope types, the send contract, and the
//! factory that binds one client to an environment and identity at startup.

mod backend;
mod client;
mod factory;
mod types;

pub use backend::PushGateway;
pub use client::{ApnsClient, Endpoint};
pub use factory::create_gateway;
pub use types::{GatewayResponse, Notification};
