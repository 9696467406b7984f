//! Error handling utilities for route handlers

use axum::http::StatusCode;
use tracing::{error, warn};

use crate::domain::feed::{FeedError, StoreError};

/// Extension trait for logging errors and converting to StatusCode
pub trait LogErr<T> {
    /// Log error with context and return INTERNAL_SERVER_ERROR
    fn log_500(self, context: &str) -> Result<T, StatusCode>;
}

impl<T, E: std::fmt::Display> LogErr<T> for Result<T, E> {
    fn log_500(self, context: &str) -> Result<T, StatusCode> {
        self.map_err(|e| {
            error!("{}: {}", context, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }
}

impl From<FeedError> for StatusCode {
    fn from(e: FeedError) -> Self {
        if e.is_validation() {
            warn!("Rejected feed request: {}", e);
            return StatusCode::BAD_REQUEST;
        }
        match e {
            FeedError::UnknownUser(_) => StatusCode::UNAUTHORIZED,
            FeedError::TweetNotFound(_) => StatusCode::NOT_FOUND,
            FeedError::Store(StoreError::MissingReference) => StatusCode::NOT_FOUND,
            other => {
                error!("Feed store error: {}", other);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
