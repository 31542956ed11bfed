//! Upload form page

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use log::error;
use tokio::fs;

use crate::error::ApiError;
use crate::handlers::AppState;

/// Serve the configured HTML form verbatim
pub async fn upload_form(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let path = &state.config.upload_form;

    match fs::read_to_string(path).await {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html)),
        Err(e) => {
            error!("Error reading HTML form {}: {e}", path.display());
            Err(ApiError::text(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error reading HTML form",
            ))
        }
    }
}
