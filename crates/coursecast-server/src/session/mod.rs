//! Session/identity resolution
//!
//! The session cookie carries the user id, signed with a key derived from the
//! configured secret. [`resolve`] turns a verified token into a [`User`] and
//! fails closed: anything unexpected yields an anonymous caller.
//!
//! Handlers pick the extractor matching how they treat anonymous callers:
//!
//! - [`Viewer`] - identity is optional
//! - [`PageUser`] - anonymous callers are redirected to `/login`
//! - [`ApiUser`] - anonymous callers get `401` JSON

use crate::error::AppError;
use crate::models::User;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};
use sqlx::SqlitePool;

pub const SESSION_COOKIE_NAME: &str = "coursecast_session";

pub const LOGIN_URL: &str = "/login";

/// Cookie attributes that depend on the deployment
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSettings {
    pub secure: bool,
}

/// Derive the 64-byte signing key from an arbitrary-length secret
pub fn session_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Map a verified session token to its user
///
/// `None` for a missing or non-numeric token, an unknown user, or a failed
/// lookup. Never errors.
#[tracing::instrument(skip(pool))]
pub async fn resolve(pool: &SqlitePool, token: Option<&str>) -> Option<User> {
    let user_id = token?.trim().parse::<i64>().ok()?;

    let lookup = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, created_at
        FROM users
        WHERE id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await;

    match lookup {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = ?e, user_id, "Session lookup failed, treating caller as anonymous");
            None
        },
    }
}

/// Attach a session for `user_id` to the jar
pub fn start_session(jar: SignedCookieJar, user_id: i64, settings: CookieSettings) -> SignedCookieJar {
    let cookie = Cookie::build((SESSION_COOKIE_NAME, user_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.secure);
    jar.add(cookie)
}

/// Remove the session cookie
pub fn end_session(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"))
}

async fn identify<S>(parts: &Parts, state: &S) -> Option<User>
where
    SqlitePool: FromRef<S>,
    Key: FromRef<S>,
{
    // Signature verification happens here; tampered cookies are dropped.
    let jar = SignedCookieJar::from_headers(&parts.headers, Key::from_ref(state));
    let token = jar.get(SESSION_COOKIE_NAME).map(|c| c.value().to_string());
    resolve(&SqlitePool::from_ref(state), token.as_deref()).await
}

/// The caller, if logged in
pub struct Viewer(pub Option<User>);

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
    SqlitePool: FromRef<S>,
    Key: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Viewer(identify(parts, state).await))
    }
}

/// Logged-in caller of a page route
pub struct PageUser(pub User);

/// Sends anonymous page visitors to the login form
pub struct LoginRedirect;

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        Redirect::to(LOGIN_URL).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageUser
where
    S: Send + Sync,
    SqlitePool: FromRef<S>,
    Key: FromRef<S>,
{
    type Rejection = LoginRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        identify(parts, state).await.map(PageUser).ok_or(LoginRedirect)
    }
}

/// Logged-in caller of an API route
pub struct ApiUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for ApiUser
where
    S: Send + Sync,
    SqlitePool: FromRef<S>,
    Key: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        identify(parts, state)
            .await
            .map(ApiUser)
            .ok_or_else(|| AppError::Unauthorized("unauthenticated".to_string()))
    }
}
