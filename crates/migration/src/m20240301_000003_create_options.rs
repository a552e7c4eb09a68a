//! Create `options` table: answer choices owned by a question.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Options::Table)
                    .if_not_exists()
                    .col(pk_auto(Options::Id))
                    .col(integer(Options::QuestionId))
                    .col(text(Options::Text))
                    .col(boolean(Options::IsCorrect))
                    .col(text_null(Options::Explanation))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_options_question")
                            .from(Options::Table, Options::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Options::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Options {
    Table,
    Id,
    QuestionId,
    Text,
    IsCorrect,
    Explanation,
}

#[derive(DeriveIden)]
enum Questions { Table, Id }
