//! Storage interface for the feed engine

use std::future::Future;

use sqlx::PgPool;

use super::error::StoreError;
use super::models::{Cursor, FeedFilter, FeedTweet, Tweet};
use super::queries::{likes, tweets};

/// The relational store the feed engine reads and writes through.
///
/// `fetch_feed` must answer in a single round trip: rows matching `filter`,
/// ordered by `(created_at DESC, id DESC)`, strictly after `cursor`, at most
/// `take` of them, each carrying its like count and whether `viewer` liked it.
pub trait FeedStore: Send + Sync {
    fn fetch_feed(
        &self,
        filter: FeedFilter,
        cursor: Option<Cursor>,
        take: i64,
        viewer: Option<i64>,
    ) -> impl Future<Output = Result<Vec<FeedTweet>, StoreError>> + Send;

    fn insert_tweet(
        &self,
        user_id: i64,
        content: &str,
    ) -> impl Future<Output = Result<Tweet, StoreError>> + Send;

    fn like_exists(
        &self,
        user_id: i64,
        tweet_id: i64,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Must fail with [`StoreError::UniqueViolation`] when the like exists
    fn insert_like(
        &self,
        user_id: i64,
        tweet_id: i64,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn delete_like(
        &self,
        user_id: i64,
        tweet_id: i64,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

/// Postgres-backed store
#[derive(Clone)]
pub struct PgFeedStore {
    pool: PgPool,
}

impl PgFeedStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FeedStore for PgFeedStore {
    async fn fetch_feed(
        &self,
        filter: FeedFilter,
        cursor: Option<Cursor>,
        take: i64,
        viewer: Option<i64>,
    ) -> Result<Vec<FeedTweet>, StoreError> {
        let rows = tweets::fetch_feed_rows(&self.pool, filter, cursor, take, viewer).await?;
        Ok(rows.into_iter().map(FeedTweet::from).collect())
    }

    async fn insert_tweet(&self, user_id: i64, content: &str) -> Result<Tweet, StoreError> {
        Ok(tweets::insert_tweet(&self.pool, user_id, content).await?)
    }

    async fn like_exists(&self, user_id: i64, tweet_id: i64) -> Result<bool, StoreError> {
        Ok(likes::like_exists(&self.pool, user_id, tweet_id).await?)
    }

    async fn insert_like(&self, user_id: i64, tweet_id: i64) -> Result<(), StoreError> {
        Ok(likes::insert_like(&self.pool, user_id, tweet_id).await?)
    }

    async fn delete_like(&self, user_id: i64, tweet_id: i64) -> Result<bool, StoreError> {
        Ok(likes::delete_like(&self.pool, user_id, tweet_id).await?)
    }
}
