// Infrastructure (startup surface)
pub mod cli;
pub mod config;
pub mod error;

// Domain (translation + upstream client)
pub mod gateway;
pub mod proxy;

// Application layer
pub mod server;
