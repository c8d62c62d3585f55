//! Handlers for the `/api/diaries` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use diary_core::diary::ENTITY_NAME;
use diary_core::error::CoreError;
use diary_core::types::DbId;
use diary_db::models::diary::{DiaryEntry, DiaryInput};
use diary_db::repositories::DiaryRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    })
}

/// GET /api/diaries
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<DiaryEntry>>> {
    let entries = DiaryRepo::list(&state.pool).await?;
    Ok(Json(entries))
}

/// GET /api/diaries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DiaryEntry>> {
    let Path(id) = path?;
    let entry = DiaryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(entry))
}

/// POST /api/diaries
///
/// The entry is dated with the current time; any `date` in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<DiaryInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(input) = payload?;
    let input = input.validate()?;

    let entry = DiaryRepo::create(&state.pool, &input, chrono::Utc::now()).await?;
    tracing::info!(diary_id = entry.id, "Diary entry created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Diary created",
            id: entry.id,
        }),
    ))
}

/// PUT /api/diaries/{id}
///
/// Overwrites title, author and content. The creation date is kept.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<DiaryInput>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let input = input.validate()?;

    DiaryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(diary_id = id, "Diary entry updated");

    Ok(Json(MessageResponse::new("Diary updated")))
}

/// DELETE /api/diaries/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = path?;
    if !DiaryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(diary_id = id, "Diary entry deleted");

    Ok(Json(MessageResponse::new("Diary deleted")))
}
