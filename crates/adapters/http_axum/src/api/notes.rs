//! JSON REST handlers for notes.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use jotter_app::ports::NoteRepository;
use jotter_domain::error::{JotterError, ValidationError};
use jotter_domain::id::NoteId;
use jotter_domain::note::{Note, NoteDraft, NotePatch};

use crate::api::Data;
use crate::error::ApiError;
use crate::extract::Payload;
use crate::state::AppState;

/// Request body for creating a note.
#[derive(Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub status: Option<i64>,
}

/// Request body for updating a note.
///
/// Absent fields are left unchanged; present fields are always applied,
/// including explicit zero values.
#[derive(Deserialize)]
pub struct UpdateNoteRequest {
    pub id: i64,
    pub title: Option<String>,
    pub status: Option<i64>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Data<Vec<Note>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Data<Note>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Data<NoteId>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Data<NoteId>>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<Data<&'static str>>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_id(raw: String) -> Result<NoteId, ApiError> {
    NoteId::from_str(&raw)
        .map_err(|_| ApiError::from(JotterError::Validation(ValidationError::InvalidId(raw))))
}

/// `GET /v1/notes`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: NoteRepository + Send + Sync + 'static,
{
    let notes = state.note_service.list_notes().await?;
    Ok(ListResponse::Ok(Json(Data { data: notes })))
}

/// `GET /v1/notes/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: NoteRepository + Send + Sync + 'static,
{
    let note_id = parse_id(id)?;
    let note = state.note_service.get_note(note_id).await?;
    Ok(GetResponse::Ok(Json(Data { data: note })))
}

/// `POST /v1/notes`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Payload(req): Payload<CreateNoteRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: NoteRepository + Send + Sync + 'static,
{
    let mut draft = NoteDraft::new(req.title);
    if let Some(status) = req.status {
        draft = draft.with_status(status);
    }

    let created = state.note_service.create_note(draft).await?;
    Ok(CreateResponse::Created(Json(Data { data: created.id })))
}

/// `PUT /v1/notes`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Payload(req): Payload<UpdateNoteRequest>,
) -> Result<UpdateResponse, ApiError>
where
    R: NoteRepository + Send + Sync + 'static,
{
    let patch = NotePatch {
        title: req.title,
        status: req.status,
    };
    let id = state
        .note_service
        .update_note(NoteId::from_i64(req.id), patch)
        .await?;
    Ok(UpdateResponse::Ok(Json(Data { data: id })))
}

/// `DELETE /v1/notes/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: NoteRepository + Send + Sync + 'static,
{
    let note_id = parse_id(id)?;
    state.note_service.delete_note(note_id).await?;
    Ok(DeleteResponse::Ok(Json(Data { data: "OK" })))
}
