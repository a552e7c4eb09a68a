use axum::{extract::{rejection::JsonRejection, State}, Json};
use common::types::Message;
use service::quiz::{AttemptInput, StatView};
use tracing::info;

use crate::{errors::JsonApiError, metrics, state::ServerState};

#[utoipa::path(
    post, path = "/stats", tag = "stats",
    request_body = crate::openapi::RecordAttemptRequest,
    responses(
        (status = 200, description = "Stats updated", body = crate::openapi::MessageResponse),
        (status = 404, description = "Unknown question", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn record(
    State(state): State<ServerState>,
    payload: Result<Json<AttemptInput>, JsonRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Json(input) = payload?;
    let result = state.quiz.record_attempt(input).await;
    metrics::observe(if input.is_correct { "attempt_correct" } else { "attempt_incorrect" }, result.is_ok());
    result?;
    info!(question_id = input.question_id, is_correct = input.is_correct, "stat_update");
    Ok(Json(Message::new("Stats updated successfully")))
}

#[utoipa::path(
    get, path = "/stats", tag = "stats",
    responses((status = 200, description = "Stats with success rate", body = [crate::openapi::StatDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<StatView>>, JsonApiError> {
    let stats = state.quiz.list_stats().await?;
    Ok(Json(stats))
}
