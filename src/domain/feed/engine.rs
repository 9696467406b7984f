//! Feed engine: paginated reads and the tweet/like mutations
//!
//! Every function validates its input before touching the store, and feed
//! reads cost exactly one store round trip per page.

use tracing::debug;

use crate::constants::MAX_TWEET_CHARS;

use super::error::{FeedError, StoreError};
use super::models::{FeedFilter, FeedPage, FeedTweet, PageRequest, Tweet};
use super::paginate::split_lookahead;
use super::store::FeedStore;

/// Fetch one page of the feed selected by `filter`, decorated for `viewer`
pub async fn get_page<S: FeedStore>(
    store: &S,
    filter: FeedFilter,
    request: PageRequest,
    viewer: Option<i64>,
) -> Result<FeedPage, FeedError> {
    let limit = request.limit();
    let rows = store
        .fetch_feed(filter, request.cursor(), limit + 1, viewer)
        .await?;

    let (tweets, next_cursor) = split_lookahead(rows, limit as usize, FeedTweet::cursor);
    debug_assert!(
        request
            .cursor()
            .is_none_or(|c| tweets.iter().all(|t| c.is_before(t.created_at, t.id))),
        "store returned rows at or before the cursor"
    );

    debug!(
        ?filter,
        returned = tweets.len(),
        exhausted = next_cursor.is_none(),
        "Served feed page"
    );

    Ok(FeedPage { tweets, next_cursor })
}

/// Trim and check tweet text
fn validate_content(text: &str) -> Result<&str, FeedError> {
    let content = text.trim();
    if content.is_empty() {
        return Err(FeedError::EmptyContent);
    }
    if content.chars().count() > MAX_TWEET_CHARS {
        return Err(FeedError::ContentTooLong);
    }
    Ok(content)
}

/// Create a tweet owned by `author`
pub async fn create_tweet<S: FeedStore>(
    store: &S,
    author: i64,
    text: &str,
) -> Result<Tweet, FeedError> {
    let content = validate_content(text)?;

    let tweet = store
        .insert_tweet(author, content)
        .await
        .map_err(|e| match e {
            StoreError::MissingReference => FeedError::UnknownUser(author),
            other => other.into(),
        })?;

    debug!(tweet_id = tweet.id, user_id = author, "Created tweet");
    Ok(tweet)
}

/// Like or unlike `tweet_id` on behalf of `actor`.
///
/// Returns true if the tweet is liked afterwards. Two concurrent calls can
/// both see no like; the loser's insert hits the primary key and still
/// counts as liked.
pub async fn toggle_like<S: FeedStore>(
    store: &S,
    actor: i64,
    tweet_id: i64,
) -> Result<bool, FeedError> {
    if store.like_exists(actor, tweet_id).await? {
        store.delete_like(actor, tweet_id).await?;
        return Ok(false);
    }

    match store.insert_like(actor, tweet_id).await {
        Ok(()) => Ok(true),
        Err(StoreError::UniqueViolation) => {
            debug!(user_id = actor, tweet_id, "Like already created by a concurrent request");
            Ok(true)
        }
        Err(StoreError::MissingReference) => Err(FeedError::TweetNotFound(tweet_id)),
        Err(e) => Err(e.into()),
    }
}
