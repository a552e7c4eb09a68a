use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use models::topic;
use service::quiz::NewTopic;
use tracing::info;

use crate::{errors::JsonApiError, metrics, state::ServerState};

#[utoipa::path(
    get, path = "/topics", tag = "topics",
    responses((status = 200, description = "All topics", body = [crate::openapi::TopicDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<topic::Model>>, JsonApiError> {
    let topics = state.quiz.list_topics().await?;
    Ok(Json(topics))
}

#[utoipa::path(
    post, path = "/topics", tag = "topics",
    request_body = crate::openapi::CreateTopicRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TopicDoc),
        (status = 400, description = "Topic already exists", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewTopic>, JsonRejection>,
) -> Result<(StatusCode, Json<topic::Model>), JsonApiError> {
    let Json(input) = payload?;
    let result = state.quiz.create_topic(&input.name).await;
    metrics::observe("create_topic", result.is_ok());
    let created = result?;
    info!(topic_id = created.id, name = %created.name, "topic_create");
    Ok((StatusCode::CREATED, Json(created)))
}
