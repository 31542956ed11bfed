pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::ServerConfig;
pub use server::Server;
