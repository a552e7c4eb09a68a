use axum::{extract::{rejection::QueryRejection, Query, State}, Json};
use serde::Deserialize;
use service::quiz::QuestionView;

use crate::{errors::JsonApiError, metrics, routes::params::empty_string_as_none, state::ServerState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct RandomQuizQuery {
    /// Number of questions, 10 when omitted
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub count: Option<usize>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub topic_id: Option<i32>,
}

#[utoipa::path(
    get, path = "/quiz/random", tag = "quiz",
    params(RandomQuizQuery),
    responses((status = 200, description = "Sampled questions", body = [crate::openapi::QuestionDoc]))
)]
pub async fn random(
    State(state): State<ServerState>,
    query: Result<Query<RandomQuizQuery>, QueryRejection>,
) -> Result<Json<Vec<QuestionView>>, JsonApiError> {
    let Query(q) = query?;
    let result = state.quiz.random_quiz(q.count, q.topic_id).await;
    metrics::observe("random_quiz", result.is_ok());
    let quiz = result?;
    let scope = if q.topic_id.is_some() { "topic" } else { "all" };
    metrics::QUIZ_QUESTIONS_SERVED
        .with_label_values(&[scope])
        .inc_by(quiz.len() as u64);
    Ok(Json(quiz))
}
