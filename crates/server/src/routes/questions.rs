use axum::{extract::{rejection::{JsonRejection, QueryRejection}, Query, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use service::quiz::{NewQuestion, QuestionView};
use tracing::info;

use crate::{errors::JsonApiError, metrics, routes::params::empty_string_as_none, state::ServerState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct TopicQuery {
    /// Only questions of this topic
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub topic_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestion {
    pub id: i32,
    pub message: &'static str,
}

#[utoipa::path(
    get, path = "/questions", tag = "questions",
    params(TopicQuery),
    responses((status = 200, description = "Questions with options", body = [crate::openapi::QuestionDoc]))
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<TopicQuery>, QueryRejection>,
) -> Result<Json<Vec<QuestionView>>, JsonApiError> {
    let Query(q) = query?;
    let questions = state.quiz.list_questions(q.topic_id).await?;
    Ok(Json(questions))
}

#[utoipa::path(
    post, path = "/questions", tag = "questions",
    request_body = crate::openapi::CreateQuestionRequest,
    responses(
        (status = 201, description = "Question added", body = crate::openapi::CreatedQuestionDoc),
        (status = 400, description = "Invalid payload", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedQuestion>), JsonApiError> {
    let Json(input) = payload?;
    let result = state.quiz.create_question(input).await;
    metrics::observe("create_question", result.is_ok());
    let id = result?;
    info!(question_id = id, "question_create");
    Ok((StatusCode::CREATED, Json(CreatedQuestion { id, message: "Question added successfully" })))
}
