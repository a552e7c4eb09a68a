//! Answer choices (`options` table).
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::question;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question_id: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
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

pub async fn create<C: ConnectionTrait>(
    db: &C,
    question_id: i32,
    text: &str,
    is_correct: bool,
    explanation: Option<String>,
) -> Result<Model, ModelError> {
    if text.trim().is_empty() {
        return Err(ModelError::Validation("option text required".into()));
    }
    let am = ActiveModel {
        question_id: Set(question_id),
        text: Set(text.to_string()),
        is_correct: Set(is_correct),
        explanation: Set(explanation),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// All options belonging to any of `question_ids`, in insertion order.
pub async fn list_for_questions<C: ConnectionTrait>(
    db: &C,
    question_ids: &[i32],
) -> Result<Vec<Model>, ModelError> {
    if question_ids.is_empty() {
        return Ok(Vec::new());
    }
    Entity::find()
        .filter(Column::QuestionId.is_in(question_ids.iter().copied()))
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
