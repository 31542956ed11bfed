//! Server core functionality
//!
//! Wires configuration, shared state and routes into the HTTP server.

pub mod core;

pub use self::core::Server;
