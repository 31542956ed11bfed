//! RAX Notes Server - Entry Point
//!
//! Serves plain-text notes stored as files in a directory over HTTP.

use clap::Parser;
use log::{error, info};

use rax_notes_server::cli::CliArgs;
use rax_notes_server::utils::setup_logging;
use rax_notes_server::{Server, ServerConfig};

#[actix_web::main]
async fn main() {
    setup_logging();

    let args = CliArgs::parse();

    let config = match ServerConfig::load(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    info!("Launching notes server...");

    let server = match Server::new(config) {
        Ok(server) => server,
        Err(e) => {
            error!("Server startup failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
