//! API response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::feed::{Author, Cursor, FeedPage, FeedTweet, Tweet};
use crate::domain::users::Profile;

/// Cursor as echoed back to clients; send it as `cursor_id` and
/// `cursor_created_at` to fetch the next page
#[derive(Debug, Clone, Serialize)]
pub struct CursorResponse {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Cursor> for CursorResponse {
    fn from(c: Cursor) -> Self {
        Self {
            id: c.id,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl From<Author> for AuthorResponse {
    fn from(a: Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
            image: a.image,
        }
    }
}

/// Feed tweet API response
#[derive(Debug, Clone, Serialize)]
pub struct FeedTweetResponse {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub user: AuthorResponse,
    pub liked_by_me: bool,
}

impl From<FeedTweet> for FeedTweetResponse {
    fn from(t: FeedTweet) -> Self {
        Self {
            id: t.id,
            content: t.content,
            created_at: t.created_at,
            like_count: t.like_count,
            user: t.user.into(),
            liked_by_me: t.liked_by_me,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedPageResponse {
    pub tweets: Vec<FeedTweetResponse>,
    pub next_cursor: Option<CursorResponse>,
}

impl From<FeedPage> for FeedPageResponse {
    fn from(p: FeedPage) -> Self {
        Self {
            tweets: p.tweets.into_iter().map(Into::into).collect(),
            next_cursor: p.next_cursor.map(Into::into),
        }
    }
}

/// Newly created tweet
#[derive(Debug, Clone, Serialize)]
pub struct TweetResponse {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}

impl From<Tweet> for TweetResponse {
    fn from(t: Tweet) -> Self {
        Self {
            id: t.id,
            content: t.content,
            created_at: t.created_at,
            user_id: t.user_id,
        }
    }
}

/// Profile API response
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: Option<String>,
    pub image: Option<String>,
    pub tweets_count: i64,
    pub followers_count: i64,
    pub follows_count: i64,
    pub is_following: bool,
}

impl ProfileResponse {
    pub fn new(p: Profile, is_following: bool) -> Self {
        Self {
            id: p.id,
            name: p.name,
            image: p.image,
            tweets_count: p.tweets_count,
            followers_count: p.followers_count,
            follows_count: p.follows_count,
            is_following,
        }
    }
}
