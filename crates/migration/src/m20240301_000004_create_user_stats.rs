//! Create `user_stats` table.
//! Attempt counters per question; `last_attempt_date` is a text timestamp.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserStats::Table)
                    .if_not_exists()
                    .col(pk_auto(UserStats::Id))
                    .col(integer(UserStats::QuestionId))
                    .col(integer(UserStats::CorrectAttempts).default(0))
                    .col(integer(UserStats::IncorrectAttempts).default(0))
                    .col(text_null(UserStats::LastAttemptDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_stats_question")
                            .from(UserStats::Table, UserStats::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserStats::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserStats {
    Table,
    Id,
    QuestionId,
    CorrectAttempts,
    IncorrectAttempts,
    LastAttemptDate,
}

#[derive(DeriveIden)]
enum Questions { Table, Id }
