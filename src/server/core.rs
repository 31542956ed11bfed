use actix_web::{App, HttpServer, web};
use log::{error, info};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::handlers::{AppState, config_routes};
use crate::middleware::request_logger;
use crate::storage::filesystem::ensure_storage_dir;

pub struct Server {
    config: Arc<ServerConfig>,
}

impl Server {
    /// Prepares the storage directory. Nothing is bound until [`Server::run`].
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        if let Err(e) = ensure_storage_dir(&config.storage_dir) {
            error!(
                "Failed to create storage directory {}: {}",
                config.storage_dir.display(),
                e
            );
            return Err(e.into());
        }
        info!("Storage directory: {}", config.storage_dir.display());

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Binds the listener and serves requests until shutdown
    pub async fn run(self) -> Result<(), ServerError> {
        let state = AppState::new(Arc::clone(&self.config));

        let mut server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .wrap(request_logger())
                .configure(config_routes)
        });

        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = match server.bind(self.config.bind_address()) {
            Ok(server) => server,
            Err(e) => {
                error!("Failed to bind to {}: {}", self.config.socket_display(), e);
                return Err(e.into());
            }
        };

        info!("Server is running at http://{}", self.config.socket_display());

        server.run().await?;

        info!("Server stopped");
        Ok(())
    }
}
