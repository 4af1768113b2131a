//! Register account command

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::accounts::password::{hash_password, PasswordError};
use crate::features::shared::error_helpers::is_unique_violation;
use crate::features::shared::validation::{
    validate_email, validate_name, validate_password, FieldValidationError,
};

/// Form fields posted to `/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCommand {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    Validation(#[from] FieldValidationError),

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    Password(#[from] PasswordError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RegisterCommand {
    /// Trim name and email and lower-case the email; the password is kept verbatim
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password: self.password,
        }
    }

    pub fn validate(&self) -> Result<(), RegisterError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(email = %command.email.trim()))]
pub async fn handle(
    pool: SqlitePool,
    command: RegisterCommand,
) -> Result<RegisterResponse, RegisterError> {
    let command = command.normalized();
    command.validate()?;

    let password_hash = hash_password(command.password).await?;

    let result = sqlx::query("INSERT INTO users (name, email, password_hash) VALUES (?1, ?2, ?3)")
        .bind(&command.name)
        .bind(&command.email)
        .bind(password_hash)
        .execute(&pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RegisterError::EmailTaken
            } else {
                RegisterError::Database(e)
            }
        })?;

    let id = result.last_insert_rowid();
    tracing::info!(user_id = id, "User registered");

    Ok(RegisterResponse {
        id,
        name: command.name,
        email: command.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::test_pool;

    fn command(name: &str, email: &str, password: &str) -> RegisterCommand {
        RegisterCommand {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_normalized_trims_and_lowercases() {
        let cmd = command("  Ada ", " Ada@Example.COM ", " pw ").normalized();
        assert_eq!(cmd.name, "Ada");
        assert_eq!(cmd.email, "ada@example.com");
        assert_eq!(cmd.password, " pw ");
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            command("", "a@b.c", "pw").validate(),
            Err(RegisterError::Validation(FieldValidationError::Required { .. }))
        ));
        assert!(matches!(
            command("Ada", "nope", "pw").validate(),
            Err(RegisterError::Validation(FieldValidationError::InvalidEmail))
        ));
        assert!(matches!(
            command("Ada", "a@b.c", "").validate(),
            Err(RegisterError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_handle_registers_user() {
        let pool = test_pool().await;

        let response = handle(pool.clone(), command("Ada", "Ada@Example.com", "Password123"))
            .await
            .unwrap();
        assert_eq!(response.email, "ada@example.com");

        let stored: (String,) = sqlx::query_as("SELECT password_hash FROM users WHERE id = ?1")
            .bind(response.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(stored.0.starts_with("$argon2"));
        assert!(!stored.0.contains("Password123"));
    }

    #[tokio::test]
    async fn test_handle_duplicate_email_is_conflict() {
        let pool = test_pool().await;
        handle(pool.clone(), command("Ada", "ada@example.com", "first"))
            .await
            .unwrap();

        let err = handle(pool.clone(), command("Imposter", " ADA@example.com", "second"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegisterError::EmailTaken));

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
