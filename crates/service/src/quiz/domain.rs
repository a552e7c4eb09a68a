//! Request inputs and read projections for quiz operations.
use models::question_option;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// Narrowing applied when reading questions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub topic_id: Option<i32>,
    /// Substring matched against question text with `LIKE %..%`.
    pub text_contains: Option<String>,
}

impl QuestionFilter {
    pub fn by_topic(topic_id: Option<i32>) -> Self {
        Self { topic_id, text_contains: None }
    }
}

/// Question joined with its topic name.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct QuestionRow {
    pub id: i32,
    pub text: String,
    pub topic_id: Option<i32>,
    pub image_path: Option<String>,
    pub lecture_reference: Option<String>,
    pub topic_name: Option<String>,
}

/// Question as returned by every question read path.
///
/// Options carry `is_correct` and `explanation`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionView {
    #[serde(flatten)]
    pub question: QuestionRow,
    pub options: Vec<question_option::Model>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewOption {
    pub text: String,
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewQuestion {
    pub text: String,
    #[serde(default)]
    pub topic_id: Option<i32>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub lecture_reference: Option<String>,
    pub options: Vec<NewOption>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTopic {
    pub name: String,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct AttemptInput {
    pub question_id: i32,
    pub is_correct: bool,
}

/// Stat joined with question text and topic name.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct StatRow {
    pub id: i32,
    pub question_id: i32,
    pub correct_attempts: i32,
    pub incorrect_attempts: i32,
    pub last_attempt_date: Option<String>,
    pub question_text: String,
    pub topic_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatView {
    #[serde(flatten)]
    pub stat: StatRow,
    pub success_rate: f64,
}

impl From<StatRow> for StatView {
    fn from(stat: StatRow) -> Self {
        let success_rate = models::stat::success_rate(stat.correct_attempts, stat.incorrect_attempts);
        Self { stat, success_rate }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub count: usize,
    pub results: Vec<QuestionView>,
}
