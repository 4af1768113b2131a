//! Quizzes: one question per course, scored into progress

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{SubmitAnswerCommand, SubmitAnswerError, SubmitAnswerResponse};
pub use queries::{GetQuizForCourseError, GetQuizForCourseQuery};
pub use routes::quizzes_routes;
