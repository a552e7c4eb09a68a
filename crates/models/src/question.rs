use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{question_option, stat, topic};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub topic_id: Option<i32>,
    pub image_path: Option<String>,
    pub lecture_reference: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Topic,
    Options,
    Stats,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Topic => Entity::belongs_to(topic::Entity)
                .from(Column::TopicId)
                .to(topic::Column::Id)
                .into(),
            Relation::Options => Entity::has_many(question_option::Entity).into(),
            Relation::Stats => Entity::has_many(stat::Entity).into(),
        }
    }
}

impl Related<topic::Entity> for Entity {
    fn to() -> RelationDef { Relation::Topic.def() }
}

impl Related<question_option::Entity> for Entity {
    fn to() -> RelationDef { Relation::Options.def() }
}

impl Related<stat::Entity> for Entity {
    fn to() -> RelationDef { Relation::Stats.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    text: &str,
    topic_id: Option<i32>,
    image_path: Option<String>,
    lecture_reference: Option<String>,
) -> Result<Model, ModelError> {
    if text.trim().is_empty() {
        return Err(ModelError::Validation("question text required".into()));
    }
    let am = ActiveModel {
        text: Set(text.to_string()),
        topic_id: Set(topic_id),
        image_path: Set(image_path),
        lecture_reference: Set(lecture_reference),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(found.is_some())
}
