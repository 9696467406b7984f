//! Feed and store error types

use thiserror::Error;

use crate::constants::{MAX_FEED_LIMIT, MAX_TWEET_CHARS};

/// Failures reported by a [`FeedStore`](super::store::FeedStore)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated")]
    UniqueViolation,

    #[error("referenced row does not exist")]
    MissingReference,

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                return StoreError::UniqueViolation;
            }
            if db_err.is_foreign_key_violation() {
                return StoreError::MissingReference;
            }
        }
        StoreError::Database(e)
    }
}

/// Errors surfaced by feed reads and tweet/like mutations
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid limit {0}: must be between 1 and {max}", max = MAX_FEED_LIMIT)]
    InvalidLimit(i64),

    #[error("malformed cursor: {0}")]
    MalformedCursor(&'static str),

    #[error("tweet content must not be empty")]
    EmptyContent,

    #[error("tweet content exceeds {max} characters", max = MAX_TWEET_CHARS)]
    ContentTooLong,

    #[error("user {0} does not exist")]
    UnknownUser(i64),

    #[error("tweet {0} not found")]
    TweetNotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl FeedError {
    /// Client-input failures, rejected before the store is touched
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FeedError::InvalidLimit(_)
                | FeedError::MalformedCursor(_)
                | FeedError::EmptyContent
                | FeedError::ContentTooLong
        )
    }
}
