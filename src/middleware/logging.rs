//! Logging middleware
//!
//! Provides request logging functionality.

use actix_web::middleware::Logger;

/// Access log line: peer, request line, status, body size and latency
pub const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %Dms"#;

/// Build the per-request access logger
pub fn request_logger() -> Logger {
    Logger::new(ACCESS_LOG_FORMAT)
}
