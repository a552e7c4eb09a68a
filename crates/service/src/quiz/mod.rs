pub mod domain;
pub mod repository;
pub mod sampling;
pub mod service;

pub use domain::*;
pub use repository::{QuizRepository, SeaOrmQuizRepository};
pub use service::QuizService;
