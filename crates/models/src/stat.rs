//! Per-question attempt counters (`user_stats` table).
use chrono::Utc;
use sea_orm::{entity::prelude::*, sea_query::{Expr, OnConflict}, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::question;

/// Text layout of `last_attempt_date`, same as SQL `CURRENT_TIMESTAMP`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub question_id: i32,
    pub correct_attempts: i32,
    pub incorrect_attempts: i32,
    pub last_attempt_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Question }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Question => Entity::belongs_to(question::Entity)
                .from(Column::QuestionId)
                .to(question::Column::Id)
                .into(),
        }
    }
}

impl Related<question::Entity> for Entity {
    fn to() -> RelationDef { Relation::Question.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn timestamp_now() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Percentage of correct attempts; zero when nothing has been attempted.
pub fn success_rate(correct_attempts: i32, incorrect_attempts: i32) -> f64 {
    let total = i64::from(correct_attempts) + i64::from(incorrect_attempts);
    if total <= 0 {
        return 0.0;
    }
    f64::from(correct_attempts) / total as f64 * 100.0
}

/// Zero-count row created alongside a new question.
pub async fn init_for_question<C: ConnectionTrait>(
    db: &C,
    question_id: i32,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        question_id: Set(question_id),
        correct_attempts: Set(0),
        incorrect_attempts: Set(0),
        last_attempt_date: Set(None),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::from_db("stat", e))
}

/// Increment-or-initialize in a single statement.
///
/// Relies on the unique index over `question_id`; concurrent callers for the
/// same question never lose an increment.
pub async fn record_attempt<C: ConnectionTrait>(
    db: &C,
    question_id: i32,
    is_correct: bool,
    attempted_at: String,
) -> Result<(), ModelError> {
    let (counter, correct, incorrect) = if is_correct {
        (Column::CorrectAttempts, 1, 0)
    } else {
        (Column::IncorrectAttempts, 0, 1)
    };
    let am = ActiveModel {
        question_id: Set(question_id),
        correct_attempts: Set(correct),
        incorrect_attempts: Set(incorrect),
        last_attempt_date: Set(Some(attempted_at)),
        ..Default::default()
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::QuestionId)
                .value(counter, Expr::col((Entity, counter)).add(1))
                .update_column(Column::LastAttemptDate)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(())
}

pub async fn find_by_question<C: ConnectionTrait>(
    db: &C,
    question_id: i32,
) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::QuestionId.eq(question_id))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
