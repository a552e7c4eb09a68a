use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::question;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Questions,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Questions => Entity::has_many(question::Entity).into() }
    }
}

impl Related<question::Entity> for Entity {
    fn to() -> RelationDef { Relation::Questions.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    let am = ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::from_db("topic", e))
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(found.is_some())
}
