//! Note endpoints
//!
//! `GET /notes`, `GET|PUT|DELETE /notes/{name}` and `POST /write`. Bodies are
//! accepted as JSON or as urlencoded forms.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{Either, HttpResponse, web};
use log::error;
use serde::Deserialize;

use crate::error::ApiError;
use crate::error::handlers::{create_error, not_found_unless_invalid};
use crate::handlers::AppState;
use crate::storage;

type Body<T> = Either<web::Json<T>, web::Form<T>>;

fn into_body<T>(body: Body<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub note_name: Option<String>,
    pub note: Option<String>,
}

fn plain(text: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(text.into())
}

/// List every readable note as `[{name, text}]`
pub async fn list_notes(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    match storage::list_notes(state.storage_dir()).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result.notes)),
        Err(e) => {
            error!("Error reading notes: {e}");
            Err(ApiError::json(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error reading notes",
            ))
        }
    }
}

/// Return the raw text of one note
pub async fn get_note(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let text = storage::read_note(state.storage_dir(), &name)
        .await
        .map_err(|e| not_found_unless_invalid(&e))?;
    Ok(plain(text))
}

/// Overwrite an existing note
pub async fn update_note(
    state: web::Data<AppState>,
    name: web::Path<String>,
    body: Body<UpdateNoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let Some(text) = into_body(body).text else {
        return Err(ApiError::text(StatusCode::BAD_REQUEST, "Text is required"));
    };

    storage::update_note(state.storage_dir(), &name, &text)
        .await
        .map_err(|e| not_found_unless_invalid(&e))?;
    Ok(plain("Note updated"))
}

/// Remove a note
pub async fn delete_note(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    storage::delete_note(state.storage_dir(), &name)
        .await
        .map_err(|e| not_found_unless_invalid(&e))?;
    Ok(plain("Note deleted"))
}

/// Create a new note from `{note_name, note}`
pub async fn create_note(
    state: web::Data<AppState>,
    body: Body<CreateNoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = into_body(body);
    let (Some(name), Some(text)) = (
        request.note_name.filter(|n| !n.is_empty()),
        request.note.filter(|t| !t.is_empty()),
    ) else {
        return Err(ApiError::json(
            StatusCode::BAD_REQUEST,
            "Note name and text are required",
        ));
    };

    storage::create_note(state.storage_dir(), &name, &text)
        .await
        .map_err(|e| create_error(&e))?;
    Ok(HttpResponse::Created().json("Note created"))
}
