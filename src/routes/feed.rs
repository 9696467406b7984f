//! Feed endpoints (/feed, /profiles/{id}/feed)

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;
use crate::domain::feed::{self, Cursor, FeedFilter, FeedPage, PageRequest};
use super::auth::Viewer;
use super::dto::FeedPageResponse;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/feed", get(home_feed))
        .route("/profiles/{id}/feed", get(profile_feed))
}

// Query structs stay flat: serde(flatten) loses numeric types in query strings.

#[derive(Debug, Deserialize)]
struct PageQuery {
    limit: Option<i64>,
    cursor_id: Option<i64>,
    cursor_created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct HomeFeedQuery {
    #[serde(default)]
    only_following: bool,
    limit: Option<i64>,
    cursor_id: Option<i64>,
    cursor_created_at: Option<DateTime<Utc>>,
}

impl From<HomeFeedQuery> for PageQuery {
    fn from(q: HomeFeedQuery) -> Self {
        Self {
            limit: q.limit,
            cursor_id: q.cursor_id,
            cursor_created_at: q.cursor_created_at,
        }
    }
}

async fn serve_page(
    state: &AppState,
    filter: FeedFilter,
    page: PageQuery,
    viewer: Option<i64>,
) -> Result<Json<FeedPageResponse>, StatusCode> {
    let cursor = Cursor::from_parts(page.cursor_id, page.cursor_created_at)?;
    let request = PageRequest::new(page.limit, cursor)?;
    let page: FeedPage = feed::get_page(&state.feed, filter, request, viewer).await?;
    Ok(Json(page.into()))
}

/// GET /feed - Global feed, or only followed authors with `only_following=true`
async fn home_feed(
    State(state): State<Arc<AppState>>,
    Viewer(viewer): Viewer,
    Query(query): Query<HomeFeedQuery>,
) -> Result<Json<FeedPageResponse>, StatusCode> {
    let filter = FeedFilter::home(viewer, query.only_following);
    serve_page(&state, filter, query.into(), viewer).await
}

/// GET /profiles/:id/feed - Tweets written by one user
async fn profile_feed(
    State(state): State<Arc<AppState>>,
    Viewer(viewer): Viewer,
    Path(user_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<FeedPageResponse>, StatusCode> {
    serve_page(&state, FeedFilter::profile(user_id), query, viewer).await
}
