//! Database models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registered learner
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// Course with its lesson video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub video_filename: String,
}

/// The single quiz attached to a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub course_id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub answer_index: i64,
}

/// Row shape of `quizzes`; options are stored as a JSON array
#[derive(Debug, Clone, FromRow)]
pub struct QuizRecord {
    pub id: i64,
    pub course_id: i64,
    pub question: String,
    pub options_json: String,
    pub answer_index: i64,
}

impl TryFrom<QuizRecord> for Quiz {
    type Error = serde_json::Error;

    fn try_from(record: QuizRecord) -> Result<Self, Self::Error> {
        Ok(Quiz {
            id: record.id,
            course_id: record.course_id,
            question: record.question,
            options: serde_json::from_str(&record.options_json)?,
            answer_index: record.answer_index,
        })
    }
}

/// Completion of one course by one user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Progress {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub progress_percent: i64,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_from_record() {
        let record = QuizRecord {
            id: 1,
            course_id: 7,
            question: "What is Rust?".to_string(),
            options_json: r#"["A language","A fungus"]"#.to_string(),
            answer_index: 0,
        };
        let quiz = Quiz::try_from(record).unwrap();
        assert_eq!(quiz.options, vec!["A language", "A fungus"]);
        assert_eq!(quiz.course_id, 7);
    }

    #[test]
    fn test_quiz_from_corrupt_record() {
        let record = QuizRecord {
            id: 1,
            course_id: 7,
            question: "?".to_string(),
            options_json: "not json".to_string(),
            answer_index: 0,
        };
        assert!(Quiz::try_from(record).is_err());
    }

    #[test]
    fn test_user_serialization_omits_hash() {
        let user = User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: NaiveDateTime::default(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
    }
}
