//! Tweet action endpoints (/tweets/*)

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::AppState;
use crate::domain::feed;
use super::auth::AuthUser;
use super::dto::TweetResponse;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tweets", post(create_tweet))
        .route("/tweets/{id}/like", post(toggle_like))
}

#[derive(Deserialize)]
struct CreateTweetRequest {
    text: String,
}

/// POST /tweets - Publish a tweet as the signed-in user
async fn create_tweet(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<CreateTweetRequest>,
) -> Result<(StatusCode, Json<TweetResponse>), StatusCode> {
    let tweet = feed::create_tweet(&state.feed, user_id, &req.text).await?;

    // tweet count on the author's profile just changed
    state.profile_cache.invalidate(user_id).await;

    info!(tweet_id = tweet.id, user_id, "Tweet created");
    Ok((StatusCode::CREATED, Json(tweet.into())))
}

#[derive(Serialize)]
struct ToggleLikeResponse {
    added_like: bool,
}

/// POST /tweets/:id/like - Like the tweet, or remove an existing like
async fn toggle_like(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(tweet_id): Path<i64>,
) -> Result<Json<ToggleLikeResponse>, StatusCode> {
    let added_like = feed::toggle_like(&state.feed, user_id, tweet_id).await?;
    Ok(Json(ToggleLikeResponse { added_like }))
}
