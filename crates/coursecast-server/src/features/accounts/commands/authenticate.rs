//! Authenticate (log in) command

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::accounts::password::{verify_password, PasswordError};
use crate::models::User;

/// Form fields posted to `/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateCommand {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthenticateError {
    /// Same variant for an unknown email and a wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    Password(#[from] PasswordError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool, command), fields(email = %command.email.trim()))]
pub async fn handle(pool: SqlitePool, command: AuthenticateCommand) -> Result<User, AuthenticateError> {
    let email = command.email.trim().to_lowercase();
    if email.is_empty() || command.password.is_empty() {
        return Err(AuthenticateError::InvalidCredentials);
    }

    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, created_at
        FROM users
        WHERE email = ?1
        "#,
    )
    .bind(&email)
    .fetch_optional(&pool)
    .await?;

    let Some(user) = user else {
        tracing::debug!("Login attempt for unknown email");
        return Err(AuthenticateError::InvalidCredentials);
    };

    if !verify_password(command.password, user.password_hash.clone()).await? {
        tracing::debug!(user_id = user.id, "Login attempt with wrong password");
        return Err(AuthenticateError::InvalidCredentials);
    }

    tracing::info!(user_id = user.id, "User authenticated");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::accounts::commands::register::{self, RegisterCommand};
    use crate::features::shared::test_helpers::test_pool;

    async fn registered_pool() -> SqlitePool {
        let pool = test_pool().await;
        register::handle(
            pool.clone(),
            RegisterCommand {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "Password123".to_string(),
            },
        )
        .await
        .unwrap();
        pool
    }

    fn login(email: &str, password: &str) -> AuthenticateCommand {
        AuthenticateCommand {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_credentials() {
        let pool = registered_pool().await;
        let user = handle(pool, login(" ADA@example.com ", "Password123")).await.unwrap();
        assert_eq!(user.name, "Ada");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_alike() {
        let pool = registered_pool().await;

        let wrong = handle(pool.clone(), login("ada@example.com", "nope")).await.unwrap_err();
        let unknown = handle(pool, login("bob@example.com", "Password123")).await.unwrap_err();

        assert!(matches!(wrong, AuthenticateError::InvalidCredentials));
        assert!(matches!(unknown, AuthenticateError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn test_empty_fields_rejected() {
        let pool = registered_pool().await;
        assert!(matches!(
            handle(pool, login("", "")).await,
            Err(AuthenticateError::InvalidCredentials)
        ));
    }
}
