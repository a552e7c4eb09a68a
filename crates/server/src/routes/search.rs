use axum::{extract::{rejection::QueryRejection, Query, State}, Json};
use serde::Deserialize;
use service::quiz::SearchResults;

use crate::{errors::JsonApiError, metrics, routes::params::empty_string_as_none, state::ServerState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Substring to look for in question text
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub topic_id: Option<i32>,
}

#[utoipa::path(
    get, path = "/search", tag = "questions",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matches", body = crate::openapi::SearchResultsDoc),
        (status = 400, description = "Search query is required", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn search(
    State(state): State<ServerState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResults>, JsonApiError> {
    let Query(q) = query?;
    let result = state.quiz.search(q.q.as_deref(), q.topic_id).await;
    metrics::observe("search", result.is_ok());
    Ok(Json(result?))
}
