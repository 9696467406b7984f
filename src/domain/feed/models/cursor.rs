//! Pagination cursor and page request validation

use chrono::{DateTime, Utc};

use crate::constants::{DEFAULT_FEED_LIMIT, MAX_FEED_LIMIT};
use crate::domain::feed::error::FeedError;

/// Key of the last tweet a client has seen.
///
/// Feeds are ordered by `(created_at DESC, id DESC)`, so the pair is a total
/// order even when timestamps collide. The next page starts strictly after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

impl Cursor {
    /// Build a cursor from its two wire fields.
    ///
    /// Both absent means "first page". One without the other is rejected.
    pub fn from_parts(
        id: Option<i64>,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Self>, FeedError> {
        match (id, created_at) {
            (Some(id), Some(created_at)) => Ok(Some(Cursor { id, created_at })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(FeedError::MalformedCursor("cursor_created_at is missing")),
            (None, Some(_)) => Err(FeedError::MalformedCursor("cursor_id is missing")),
        }
    }

    /// Whether a row with this key comes after the cursor in a newest-first feed
    pub fn is_before(&self, created_at: DateTime<Utc>, id: i64) -> bool {
        (created_at, id) < (self.created_at, self.id)
    }
}

/// A validated request for one page of a feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: i64,
    cursor: Option<Cursor>,
}

impl PageRequest {
    pub fn new(limit: Option<i64>, cursor: Option<Cursor>) -> Result<Self, FeedError> {
        let limit = limit.unwrap_or(DEFAULT_FEED_LIMIT);
        if !(1..=MAX_FEED_LIMIT).contains(&limit) {
            return Err(FeedError::InvalidLimit(limit));
        }
        Ok(Self { limit, cursor })
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }
}
