//! `/api/v1/notes` handlers. All routes require a bearer token; the
//! owner id always comes from the token, never the request body.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::dto::{CreateNoteRequest, ListNotesQuery, UpdateNoteRequest};
use crate::error::{ApiError, ApiResult};
use crate::response::respond;
use crate::validation::{validate_create_note, validate_list_query, validate_update_note};
use crate::AppState;

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<CreateNoteRequest>,
) -> ApiResult<impl IntoResponse> {
    let req = validate_create_note(&body).map_err(ApiError::Validation)?;
    let note = state.notes.create(user.id, req).await?;
    Ok((StatusCode::CREATED, respond("Create note successfully", note)))
}

pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ListNotesQuery>,
) -> ApiResult<impl IntoResponse> {
    let params = validate_list_query(&query).map_err(ApiError::Validation)?;
    let page = state.notes.list(user.id, params).await?;
    Ok(respond("Fetched notes successfully", page))
}

pub async fn get_one(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(note_id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let note = state.notes.find_one(user.id, note_id).await?;
    Ok(respond("Fetched note successfully", note))
}

pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(note_id): Path<Uuid>,
    Json(body): Json<UpdateNoteRequest>,
) -> ApiResult<impl IntoResponse> {
    let patch = validate_update_note(&body).map_err(ApiError::Validation)?;
    let note = state.notes.update(user.id, note_id, patch).await?;
    Ok(respond("Updated note successfully", note))
}

pub async fn remove(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(note_id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.notes.remove(user.id, note_id).await?;
    Ok(respond("Deleted note successfully", serde_json::Value::Null))
}
