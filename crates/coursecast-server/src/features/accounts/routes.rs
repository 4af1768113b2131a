//! Account routes
//!
//! - `GET  /register` - Registration form
//! - `POST /register` - Create an account, then redirect to `/login`
//! - `GET  /login` - Login form
//! - `POST /login` - Start a session, then redirect to `/dashboard`
//! - `GET  /logout` - End the session, then redirect to `/`
//!
//! Expected failures re-render the form with a message and a matching status.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::SignedCookieJar;
use sqlx::SqlitePool;

use super::commands::{
    authenticate, register, AuthenticateCommand, AuthenticateError, RegisterCommand, RegisterError,
};
use crate::error::AppError;
use crate::features::FeatureState;
use crate::session::{end_session, start_session, CookieSettings, Viewer};
use crate::views;

// ============================================================================
// Router Configuration
// ============================================================================

pub fn accounts_routes() -> Router<FeatureState> {
    Router::new()
        .route("/register", get(register_form).post(register_account))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}

// ============================================================================
// Handlers
// ============================================================================

async fn register_form(Viewer(viewer): Viewer) -> Response {
    views::accounts::register_page(viewer.as_ref(), None, "", "").into_response()
}

#[tracing::instrument(skip(pool, command), fields(email = %command.email.trim()))]
async fn register_account(
    State(pool): State<SqlitePool>,
    Form(command): Form<RegisterCommand>,
) -> Result<Response, AppError> {
    let (name, email) = (command.name.clone(), command.email.clone());

    match register::handle(pool, command).await {
        Ok(response) => {
            tracing::info!(user_id = response.id, "Account created via form");
            Ok(Redirect::to("/login").into_response())
        },
        Err(RegisterError::EmailTaken) => Ok(form_error(
            StatusCode::CONFLICT,
            views::accounts::register_page(None, Some(&RegisterError::EmailTaken.to_string()), &name, &email),
        )),
        Err(RegisterError::Validation(e)) => Ok(form_error(
            StatusCode::BAD_REQUEST,
            views::accounts::register_page(None, Some(&e.to_string()), &name, &email),
        )),
        Err(e) => Err(e.into()),
    }
}

async fn login_form(Viewer(viewer): Viewer) -> Response {
    if viewer.is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    views::accounts::login_page(None, "").into_response()
}

#[tracing::instrument(skip(pool, jar, command), fields(email = %command.email.trim()))]
async fn login(
    State(pool): State<SqlitePool>,
    State(cookies): State<CookieSettings>,
    jar: SignedCookieJar,
    Form(command): Form<AuthenticateCommand>,
) -> Result<Response, AppError> {
    let email = command.email.clone();

    match authenticate::handle(pool, command).await {
        Ok(user) => {
            let jar = start_session(jar, user.id, cookies);
            Ok((jar, Redirect::to("/dashboard")).into_response())
        },
        Err(AuthenticateError::InvalidCredentials) => Ok(form_error(
            StatusCode::UNAUTHORIZED,
            views::accounts::login_page(
                Some(&AuthenticateError::InvalidCredentials.to_string()),
                &email,
            ),
        )),
        Err(e) => Err(e.into()),
    }
}

async fn logout(jar: SignedCookieJar) -> impl IntoResponse {
    tracing::debug!("Session ended");
    (end_session(jar), Redirect::to("/"))
}

fn form_error(status: StatusCode, page: maud::Markup) -> Response {
    (status, page).into_response()
}

// ============================================================================
// Error Conversion
// ============================================================================

impl From<RegisterError> for AppError {
    fn from(err: RegisterError) -> Self {
        match err {
            RegisterError::Validation(e) => AppError::Validation(e.to_string()),
            RegisterError::EmailTaken => AppError::Conflict(err.to_string()),
            RegisterError::Password(e) => AppError::Internal(e.to_string()),
            RegisterError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<AuthenticateError> for AppError {
    fn from(err: AuthenticateError) -> Self {
        match err {
            AuthenticateError::InvalidCredentials => AppError::Unauthorized(err.to_string()),
            AuthenticateError::Password(e) => AppError::Internal(e.to_string()),
            AuthenticateError::Database(e) => AppError::Database(e),
        }
    }
}
