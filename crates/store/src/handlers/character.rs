//! Handlers for the `/characters` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marvel_core::error::CoreError;
use marvel_core::types::CharacterId;

use crate::error::{AppError, AppResult};
use crate::models::{CharacterInput, CharacterRecord};
use crate::state::AppState;

/// Unwrap a JSON body, turning extractor rejections into `BAD_REQUEST`.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

fn not_found(id: CharacterId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Character",
        id,
    })
}

/// GET /characters
pub async fn list(State(state): State<AppState>) -> Json<Vec<CharacterRecord>> {
    Json(state.repo.list().await)
}

/// GET /characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<CharacterId>,
) -> AppResult<Json<CharacterRecord>> {
    let record = state.repo.find_by_id(id).await.ok_or_else(|| not_found(id))?;
    Ok(Json(record))
}

/// POST /characters
///
/// Missing universe and rating fall back to `Earth-616` and 5.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CharacterInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CharacterRecord>)> {
    let input = json_body(payload)?;
    input.validate_input()?;
    let record = state.repo.create(&input).await?;
    tracing::info!(id = record.id, name = %record.name, "Character created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /characters/{id}
///
/// Fully replaces the record; same defaults as create.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CharacterId>,
    payload: Result<Json<CharacterInput>, JsonRejection>,
) -> AppResult<Json<CharacterRecord>> {
    let input = json_body(payload)?;
    input.validate_input()?;
    let record = state
        .repo
        .update(id, &input)
        .await
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, name = %record.name, "Character updated");
    Ok(Json(record))
}

/// DELETE /characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<CharacterId>,
) -> AppResult<StatusCode> {
    if state.repo.delete(id).await {
        tracing::info!(id, "Character deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
