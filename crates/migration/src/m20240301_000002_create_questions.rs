//! Create `questions` table.
//! A question optionally belongs to a topic; media and lecture fields are plain strings.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(pk_auto(Questions::Id))
                    .col(text(Questions::Text))
                    .col(integer_null(Questions::TopicId))
                    .col(text_null(Questions::ImagePath))
                    .col(text_null(Questions::LectureReference))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_topic")
                            .from(Questions::Table, Questions::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Questions::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Questions {
    Table,
    Id,
    Text,
    TopicId,
    ImagePath,
    LectureReference,
}

#[derive(DeriveIden)]
enum Topics { Table, Id }
