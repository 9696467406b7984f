//! Session extractors
//!
//! The access token lives in the `access_token` cookie. [`AuthUser`] is for
//! routes that need a signed-in actor; [`Viewer`] is for public routes that
//! personalize their output when someone is signed in.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;
use tracing::debug;

use crate::AppState;
use crate::constants::ACCESS_TOKEN_COOKIE;
use crate::services::session;

/// Extractor that validates the access_token cookie and returns the user_id
pub struct AuthUser(pub i64);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let access_token = jar
            .get(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let user_id =
            session::validate_access_token(access_token, &state.jwt_secret).map_err(|e| {
                debug!("JWT validation failed: {}", e);
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user_id))
    }
}

/// Extractor for the optional current viewer.
///
/// A missing, expired or invalid token yields an anonymous viewer rather than
/// a rejection.
pub struct Viewer(pub Option<i64>);

impl FromRequestParts<Arc<AppState>> for Viewer {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let viewer = AuthUser::from_request_parts(parts, state)
            .await
            .ok()
            .map(|AuthUser(user_id)| user_id);

        Ok(Viewer(viewer))
    }
}
