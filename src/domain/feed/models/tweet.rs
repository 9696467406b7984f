//! Tweet model definitions

use chrono::{DateTime, Utc};

use super::cursor::Cursor;

/// Author fields joined onto every feed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub name: Option<String>,
    pub image: Option<String>,
}

/// A tweet decorated for one viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedTweet {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub user: Author,
    pub liked_by_me: bool,
}

impl FeedTweet {
    /// Position of this tweet in the newest-first ordering
    pub fn cursor(&self) -> Cursor {
        Cursor {
            id: self.id,
            created_at: self.created_at,
        }
    }
}

/// Flat row produced by the feed query
#[derive(Debug, sqlx::FromRow)]
pub struct FeedRow {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub liked_by_me: bool,
    pub user_id: i64,
    pub user_name: Option<String>,
    pub user_image: Option<String>,
}

impl From<FeedRow> for FeedTweet {
    fn from(row: FeedRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            created_at: row.created_at,
            like_count: row.like_count,
            user: Author {
                id: row.user_id,
                name: row.user_name,
                image: row.user_image,
            },
            liked_by_me: row.liked_by_me,
        }
    }
}

/// A tweet as stored, returned after creation
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Tweet {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}
