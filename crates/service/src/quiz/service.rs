use std::collections::HashMap;
use std::sync::Arc;

use models::{question_option, stat, topic};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::quiz::domain::{
    AttemptInput, NewQuestion, QuestionFilter, QuestionRow, QuestionView, SearchResults, StatView,
};
use crate::quiz::repository::QuizRepository;
use crate::quiz::sampling::sample_without_replacement;

/// Questions per quiz when the caller gives no count.
pub const DEFAULT_QUIZ_SIZE: usize = 10;

/// Application service for topics, questions, quizzes, stats and search.
/// Input checks live here; SQL lives in the repository.
pub struct QuizService<R: QuizRepository> {
    repo: Arc<R>,
}

impl<R: QuizRepository> QuizService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_topics(&self) -> Result<Vec<topic::Model>, ServiceError> {
        self.repo.list_topics().await
    }

    #[instrument(skip(self))]
    pub async fn create_topic(&self, name: &str) -> Result<topic::Model, ServiceError> {
        if name.trim().is_empty() {
            return Err(ServiceError::Validation("name is required".into()));
        }
        let created = self.repo.create_topic(name).await?;
        info!(topic_id = created.id, "topic created");
        Ok(created)
    }

    pub async fn list_questions(
        &self,
        topic_id: Option<i32>,
    ) -> Result<Vec<QuestionView>, ServiceError> {
        let rows = self.repo.find_questions(&QuestionFilter::by_topic(topic_id)).await?;
        self.attach_options(rows).await
    }

    #[instrument(skip(self, input), fields(topic_id = ?input.topic_id, options = input.options.len()))]
    pub async fn create_question(&self, input: NewQuestion) -> Result<i32, ServiceError> {
        if input.text.trim().is_empty() {
            return Err(ServiceError::Validation("text is required".into()));
        }
        if input.options.is_empty() {
            return Err(ServiceError::Validation("at least one option is required".into()));
        }
        if input.options.iter().any(|o| o.text.trim().is_empty()) {
            return Err(ServiceError::Validation("option text is required".into()));
        }
        let id = self.repo.create_question(&input).await?;
        info!(question_id = id, "question created");
        Ok(id)
    }

    /// Uniform sample without replacement; a pool smaller than `count` is returned whole.
    #[instrument(skip(self))]
    pub async fn random_quiz(
        &self,
        count: Option<usize>,
        topic_id: Option<i32>,
    ) -> Result<Vec<QuestionView>, ServiceError> {
        let count = count.unwrap_or(DEFAULT_QUIZ_SIZE);
        let pool = self.repo.find_questions(&QuestionFilter::by_topic(topic_id)).await?;
        let available = pool.len();
        let picked = {
            let mut rng = rand::thread_rng();
            sample_without_replacement(pool, count, &mut rng)
        };
        info!(requested = count, available, served = picked.len(), "quiz sampled");
        self.attach_options(picked).await
    }

    #[instrument(skip(self))]
    pub async fn record_attempt(&self, input: AttemptInput) -> Result<(), ServiceError> {
        if !self.repo.question_exists(input.question_id).await? {
            return Err(ServiceError::not_found("question"));
        }
        self.repo
            .record_attempt(input.question_id, input.is_correct, stat::timestamp_now())
            .await
    }

    pub async fn list_stats(&self) -> Result<Vec<StatView>, ServiceError> {
        let rows = self.repo.list_stats().await?;
        Ok(rows.into_iter().map(StatView::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: Option<&str>,
        topic_id: Option<i32>,
    ) -> Result<SearchResults, ServiceError> {
        let query = match query {
            Some(q) if !q.is_empty() => q,
            _ => return Err(ServiceError::MissingParameter("Search query is required".into())),
        };
        let filter = QuestionFilter { topic_id, text_contains: Some(query.to_string()) };
        let rows = self.repo.find_questions(&filter).await?;
        let results = self.attach_options(rows).await?;
        Ok(SearchResults { count: results.len(), results })
    }

    /// One options query for the whole batch, grouped back onto each question.
    async fn attach_options(
        &self,
        rows: Vec<QuestionRow>,
    ) -> Result<Vec<QuestionView>, ServiceError> {
        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let mut grouped: HashMap<i32, Vec<question_option::Model>> = HashMap::new();
        for opt in self.repo.options_for(&ids).await? {
            grouped.entry(opt.question_id).or_default().push(opt);
        }
        Ok(rows
            .into_iter()
            .map(|question| {
                let options = grouped.remove(&question.id).unwrap_or_default();
                QuestionView { question, options }
            })
            .collect())
    }
}
