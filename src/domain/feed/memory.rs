//! In-memory [`FeedStore`] for tests.
//!
//! Mirrors the Postgres schema closely enough to exercise the engine: the
//! likes set enforces its `(user_id, tweet_id)` key, tweets and likes check
//! their foreign keys, and every store call counts as one round trip.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::error::StoreError;
use super::models::{Author, Cursor, FeedFilter, FeedTweet, Tweet};
use super::store::FeedStore;

#[derive(Default)]
struct State {
    users: HashMap<i64, Author>,
    /// (follower_id, following_id)
    follows: HashSet<(i64, i64)>,
    tweets: Vec<Tweet>,
    /// (user_id, tweet_id)
    likes: HashSet<(i64, i64)>,
    next_tweet_id: i64,
}

impl State {
    fn admits(&self, filter: FeedFilter, tweet: &Tweet) -> bool {
        match filter {
            FeedFilter::All => true,
            FeedFilter::ByAuthor(user_id) => tweet.user_id == user_id,
            FeedFilter::ByFollowedAuthors(viewer_id) => {
                self.follows.contains(&(viewer_id, tweet.user_id))
            }
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    round_trips: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn round_trip(&self) {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
    }

    pub fn round_trips(&self) -> usize {
        self.round_trips.load(Ordering::SeqCst)
    }

    pub fn add_user(&self, id: i64, name: &str) {
        self.lock().users.insert(
            id,
            Author {
                id,
                name: Some(name.to_string()),
                image: None,
            },
        );
    }

    pub fn follow(&self, follower_id: i64, following_id: i64) {
        self.lock().follows.insert((follower_id, following_id));
    }

    pub fn add_tweet(&self, user_id: i64, content: &str, created_at: DateTime<Utc>) -> i64 {
        let id = {
            let mut state = self.lock();
            state.next_tweet_id += 1;
            state.next_tweet_id
        };
        self.add_tweet_with_id(id, user_id, content, created_at);
        id
    }

    pub fn add_tweet_with_id(&self, id: i64, user_id: i64, content: &str, created_at: DateTime<Utc>) {
        let mut state = self.lock();
        state.next_tweet_id = state.next_tweet_id.max(id);
        state.tweets.push(Tweet {
            id,
            content: content.to_string(),
            created_at,
            user_id,
        });
    }

    pub fn like(&self, user_id: i64, tweet_id: i64) {
        self.lock().likes.insert((user_id, tweet_id));
    }

    pub fn like_count(&self, tweet_id: i64) -> usize {
        self.lock()
            .likes
            .iter()
            .filter(|(_, t)| *t == tweet_id)
            .count()
    }
}

impl FeedStore for MemoryStore {
    async fn fetch_feed(
        &self,
        filter: FeedFilter,
        cursor: Option<Cursor>,
        take: i64,
        viewer: Option<i64>,
    ) -> Result<Vec<FeedTweet>, StoreError> {
        self.round_trip();
        let state = self.lock();

        let mut matching: Vec<&Tweet> = state
            .tweets
            .iter()
            .filter(|t| state.admits(filter, t))
            .filter(|t| cursor.is_none_or(|c| c.is_before(t.created_at, t.id)))
            .collect();
        matching.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(matching
            .into_iter()
            .take(take as usize)
            .map(|t| FeedTweet {
                id: t.id,
                content: t.content.clone(),
                created_at: t.created_at,
                like_count: state.likes.iter().filter(|(_, id)| *id == t.id).count() as i64,
                user: state.users[&t.user_id].clone(),
                liked_by_me: viewer.is_some_and(|v| state.likes.contains(&(v, t.id))),
            })
            .collect())
    }

    async fn insert_tweet(&self, user_id: i64, content: &str) -> Result<Tweet, StoreError> {
        self.round_trip();
        if !self.lock().users.contains_key(&user_id) {
            return Err(StoreError::MissingReference);
        }
        let created_at = Utc::now();
        let id = self.add_tweet(user_id, content, created_at);
        Ok(Tweet {
            id,
            content: content.to_string(),
            created_at,
            user_id,
        })
    }

    async fn like_exists(&self, user_id: i64, tweet_id: i64) -> Result<bool, StoreError> {
        self.round_trip();
        let exists = { self.lock().likes.contains(&(user_id, tweet_id)) };
        // let a concurrent caller observe the same state before we act on it
        tokio::task::yield_now().await;
        Ok(exists)
    }

    async fn insert_like(&self, user_id: i64, tweet_id: i64) -> Result<(), StoreError> {
        self.round_trip();
        let mut state = self.lock();
        if !state.tweets.iter().any(|t| t.id == tweet_id) {
            return Err(StoreError::MissingReference);
        }
        if !state.likes.insert((user_id, tweet_id)) {
            return Err(StoreError::UniqueViolation);
        }
        Ok(())
    }

    async fn delete_like(&self, user_id: i64, tweet_id: i64) -> Result<bool, StoreError> {
        self.round_trip();
        Ok(self.lock().likes.remove(&(user_id, tweet_id)))
    }
}
