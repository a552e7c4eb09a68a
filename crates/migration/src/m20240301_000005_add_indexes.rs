use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Questions: filter by topic
        manager
            .create_index(
                Index::create()
                    .name("idx_questions_topic")
                    .table(Questions::Table)
                    .col(Questions::TopicId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Options: loaded per question
        manager
            .create_index(
                Index::create()
                    .name("idx_options_question")
                    .table(Options::Table)
                    .col(Options::QuestionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // UserStats: one row per question, conflict target for the attempt upsert
        manager
            .create_index(
                Index::create()
                    .name("uniq_user_stats_question")
                    .table(UserStats::Table)
                    .col(UserStats::QuestionId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_questions_topic").table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_options_question").table(Options::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_user_stats_question").table(UserStats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Questions { Table, TopicId }

#[derive(DeriveIden)]
enum Options { Table, QuestionId }

#[derive(DeriveIden)]
enum UserStats { Table, QuestionId }
