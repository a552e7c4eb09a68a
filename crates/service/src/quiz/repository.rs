use async_trait::async_trait;
use models::{question, question_option, stat, topic};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionTrait,
};
use tracing::debug;

use crate::errors::ServiceError;
use crate::quiz::domain::{NewQuestion, QuestionFilter, QuestionRow, StatRow};

#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn list_topics(&self) -> Result<Vec<topic::Model>, ServiceError>;
    async fn create_topic(&self, name: &str) -> Result<topic::Model, ServiceError>;
    async fn find_questions(
        &self,
        filter: &QuestionFilter,
    ) -> Result<Vec<QuestionRow>, ServiceError>;
    async fn options_for(
        &self,
        question_ids: &[i32],
    ) -> Result<Vec<question_option::Model>, ServiceError>;
    /// Insert question, options and a zeroed stat as one unit; returns the question id.
    async fn create_question(&self, input: &NewQuestion) -> Result<i32, ServiceError>;
    async fn question_exists(&self, id: i32) -> Result<bool, ServiceError>;
    async fn record_attempt(
        &self,
        question_id: i32,
        is_correct: bool,
        attempted_at: String,
    ) -> Result<(), ServiceError>;
    async fn list_stats(&self) -> Result<Vec<StatRow>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmQuizRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmQuizRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl QuizRepository for SeaOrmQuizRepository {
    async fn list_topics(&self) -> Result<Vec<topic::Model>, ServiceError> {
        Ok(topic::list_all(&self.db).await?)
    }

    async fn create_topic(&self, name: &str) -> Result<topic::Model, ServiceError> {
        Ok(topic::create(&self.db, name).await?)
    }

    async fn find_questions(
        &self,
        filter: &QuestionFilter,
    ) -> Result<Vec<QuestionRow>, ServiceError> {
        let mut select = question::Entity::find()
            .select_only()
            .columns([
                question::Column::Id,
                question::Column::Text,
                question::Column::TopicId,
                question::Column::ImagePath,
                question::Column::LectureReference,
            ])
            .column_as(topic::Column::Name, "topic_name")
            .join(JoinType::LeftJoin, question::Relation::Topic.def());
        if let Some(topic_id) = filter.topic_id {
            select = select.filter(question::Column::TopicId.eq(topic_id));
        }
        if let Some(needle) = filter.text_contains.as_deref() {
            select = select.filter(question::Column::Text.contains(needle));
        }
        let rows = select
            .order_by_asc(question::Column::Id)
            .into_model::<QuestionRow>()
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        debug!(count = rows.len(), ?filter, "questions loaded");
        Ok(rows)
    }

    async fn options_for(
        &self,
        question_ids: &[i32],
    ) -> Result<Vec<question_option::Model>, ServiceError> {
        Ok(question_option::list_for_questions(&self.db, question_ids).await?)
    }

    async fn create_question(&self, input: &NewQuestion) -> Result<i32, ServiceError> {
        // Returning early drops `txn` uncommitted, which rolls it back.
        let txn = self.db.begin().await.map_err(ServiceError::db)?;

        if let Some(topic_id) = input.topic_id {
            if !topic::exists(&txn, topic_id).await? {
                return Err(ServiceError::Validation(format!("topic {} does not exist", topic_id)));
            }
        }

        let created = question::create(
            &txn,
            &input.text,
            input.topic_id,
            input.image_path.clone(),
            input.lecture_reference.clone(),
        )
        .await?;
        for opt in &input.options {
            question_option::create(&txn, created.id, &opt.text, opt.is_correct, opt.explanation.clone())
                .await?;
        }
        stat::init_for_question(&txn, created.id).await?;

        txn.commit().await.map_err(ServiceError::db)?;
        Ok(created.id)
    }

    async fn question_exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(question::exists(&self.db, id).await?)
    }

    async fn record_attempt(
        &self,
        question_id: i32,
        is_correct: bool,
        attempted_at: String,
    ) -> Result<(), ServiceError> {
        Ok(stat::record_attempt(&self.db, question_id, is_correct, attempted_at).await?)
    }

    async fn list_stats(&self) -> Result<Vec<StatRow>, ServiceError> {
        stat::Entity::find()
            .select_only()
            .columns([
                stat::Column::Id,
                stat::Column::QuestionId,
                stat::Column::CorrectAttempts,
                stat::Column::IncorrectAttempts,
                stat::Column::LastAttemptDate,
            ])
            .column_as(question::Column::Text, "question_text")
            .column_as(topic::Column::Name, "topic_name")
            .join(JoinType::InnerJoin, stat::Relation::Question.def())
            .join(JoinType::LeftJoin, question::Relation::Topic.def())
            .order_by_asc(stat::Column::Id)
            .into_model::<StatRow>()
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }
}
