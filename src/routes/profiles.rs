//! Profile endpoints (/profiles/{id}, /profiles/{id}/follow)

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;
use crate::domain::feed::StoreError;
use crate::domain::users;
use crate::services::error::LogErr;
use super::auth::{AuthUser, Viewer};
use super::dto::ProfileResponse;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/profiles/{id}", get(get_profile))
}

/// Write routes, mounted behind the rate limiter
pub fn follow_routes() -> Router<Arc<AppState>> {
    Router::new().route("/profiles/{id}/follow", post(toggle_follow))
}

/// GET /profiles/:id - Profile with counts and whether the viewer follows it
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Viewer(viewer): Viewer,
    Path(user_id): Path<i64>,
) -> Result<Json<ProfileResponse>, StatusCode> {
    let profile = match state.profile_cache.get(user_id).await {
        Some(profile) => profile,
        None => {
            let generation = state.profile_cache.generation(user_id).await;
            let profile = users::get_profile(&state.db, user_id)
                .await
                .log_500("Get profile error")?
                .ok_or(StatusCode::NOT_FOUND)?;
            state.profile_cache.insert(profile.clone(), generation).await;
            profile
        }
    };

    let is_following = match viewer {
        Some(viewer_id) if viewer_id != user_id => users::is_following(&state.db, viewer_id, user_id)
            .await
            .log_500("Check follow error")?,
        _ => false,
    };

    Ok(Json(ProfileResponse::new(profile, is_following)))
}

#[derive(Serialize)]
struct ToggleFollowResponse {
    added_follow: bool,
}

/// POST /profiles/:id/follow - Follow the user, or unfollow if already following
async fn toggle_follow(
    State(state): State<Arc<AppState>>,
    AuthUser(actor_id): AuthUser,
    Path(user_id): Path<i64>,
) -> Result<Json<ToggleFollowResponse>, StatusCode> {
    if actor_id == user_id {
        return Err(StatusCode::BAD_REQUEST);
    }

    let added_follow = match users::toggle_follow(&state.db, actor_id, user_id).await {
        Ok(added) => added,
        Err(e) => {
            return match StoreError::from(e) {
                StoreError::MissingReference => Err(StatusCode::NOT_FOUND),
                other => Err(other).log_500("Toggle follow error"),
            };
        }
    };

    // follower and following counts changed on both sides
    state.profile_cache.invalidate(user_id).await;
    state.profile_cache.invalidate(actor_id).await;

    Ok(Json(ToggleFollowResponse { added_follow }))
}
