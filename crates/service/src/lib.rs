//! Service layer for the quiz store.
//! - `quiz::repository` owns every SQL statement behind the `QuizRepository` trait.
//! - `quiz::service` composes repository calls into the HTTP-facing operations.

pub mod errors;
pub mod runtime;
pub mod quiz;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
