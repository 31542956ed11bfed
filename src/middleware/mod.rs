//! Server middleware
//!
//! Provides request logging middleware.

pub mod logging;

pub use logging::request_logger;
