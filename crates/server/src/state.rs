use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::quiz::{QuizService, SeaOrmQuizRepository};

#[derive(Clone)]
pub struct ServerState {
    pub quiz: Arc<QuizService<SeaOrmQuizRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmQuizRepository::new(db));
        Self { quiz: Arc::new(QuizService::new(repo)) }
    }
}
