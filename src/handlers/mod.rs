//! HTTP handlers
//!
//! Maps each route to a storage operation and shapes the response.

pub mod form;
pub mod notes;

use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::web;
use log::debug;
use std::path::Path;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self { config }
    }

    pub fn storage_dir(&self) -> &Path {
        &self.config.storage_dir
    }
}

/// Largest accepted request body, JSON or urlencoded
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Register all routes and body parser settings
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    // Either<Json, Form> buffers through PayloadConfig first, so all three
    // limits must agree
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .app_data(
            web::JsonConfig::default()
                .limit(MAX_BODY_BYTES)
                .error_handler(|err, _req| {
                    debug!("Rejected JSON body: {err}");
                    match err {
                        JsonPayloadError::Overflow { .. }
                        | JsonPayloadError::OverflowKnownLength { .. } => {
                            ApiError::payload_too_large().into()
                        }
                        _ => ApiError::invalid_body().into(),
                    }
                }),
        )
        .app_data(
            web::FormConfig::default()
                .limit(MAX_BODY_BYTES)
                .error_handler(|err, _req| {
                    debug!("Rejected form body: {err}");
                    match err {
                        UrlencodedError::Overflow { .. } => ApiError::payload_too_large().into(),
                        _ => ApiError::invalid_body().into(),
                    }
                }),
        );

    cfg.service(web::resource("/notes").route(web::get().to(notes::list_notes)))
        .service(
            web::resource("/notes/{name}")
                .route(web::get().to(notes::get_note))
                .route(web::put().to(notes::update_note))
                .route(web::delete().to(notes::delete_note)),
        )
        .service(web::resource("/write").route(web::post().to(notes::create_note)))
        .service(web::resource("/UploadForm.html").route(web::get().to(form::upload_form)));
}
