pub mod submit_answer;

pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerError, SubmitAnswerRequest, SubmitAnswerResponse};
