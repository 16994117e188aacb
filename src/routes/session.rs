use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};

use crate::constants::SESSION_COOKIE;
use crate::error::AppError;
use crate::models::User;
use crate::AppState;

/// The user behind the session cookie
///
/// Rejects with 401 when there is no session or the user no longer exists.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|never| match never {});

        let Some(email) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) else {
            return Err(AppError::Unauthorized);
        };

        match state.store.get_user_by_email(&email).await? {
            Some(user) => Ok(CurrentUser(user)),
            None => {
                tracing::warn!("Session refers to a user that no longer exists");
                Err(AppError::Unauthorized)
            }
        }
    }
}

/// Store the authenticated email in the session cookie
pub fn start_session(jar: PrivateCookieJar, email: &str) -> PrivateCookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, email.to_owned()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

pub fn end_session(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
