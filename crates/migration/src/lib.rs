//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_topics;
mod m20240301_000002_create_questions;
mod m20240301_000003_create_options;
mod m20240301_000004_create_user_stats;
mod m20240301_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_topics::Migration),
            Box::new(m20240301_000002_create_questions::Migration),
            Box::new(m20240301_000003_create_options::Migration),
            Box::new(m20240301_000004_create_user_stats::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000005_add_indexes::Migration),
        ]
    }
}
