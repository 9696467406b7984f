//! In-process cache of profile summaries.
//!
//! Profiles are read far more often than they change. Entries expire after a
//! TTL and are dropped explicitly whenever a write changes a user's counts
//! (new tweet, follow, unfollow). Only viewer-independent data is cached.
//!
//! A reader takes a [`Generation`] before going to the database and hands it
//! back to [`ProfileCache::insert`]. An invalidation in between bumps the
//! generation, so the stale read is never stored.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::users::Profile;

struct CachedProfile {
    profile: Profile,
    stored_at: Instant,
}

#[derive(Default)]
struct Entries {
    profiles: HashMap<i64, CachedProfile>,
    generations: HashMap<i64, u64>,
}

impl Entries {
    fn generation(&self, user_id: i64) -> Generation {
        Generation(self.generations.get(&user_id).copied().unwrap_or(0))
    }
}

/// Invalidation counter for one user, observed before a database read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

pub struct ProfileCache {
    ttl: Duration,
    entries: RwLock<Entries>,
}

impl ProfileCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(Entries::default()),
        }
    }

    /// Cached profile, if present and younger than the TTL.
    ///
    /// Expired entries are removed on the way out.
    pub async fn get(&self, user_id: i64) -> Option<Profile> {
        {
            let entries = self.entries.read().await;
            match entries.profiles.get(&user_id) {
                None => return None,
                Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                    return Some(entry.profile.clone());
                }
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write().await;
        let expired = entries
            .profiles
            .get(&user_id)
            .is_some_and(|entry| entry.stored_at.elapsed() >= self.ttl);
        if expired {
            entries.profiles.remove(&user_id);
        }
        None
    }

    /// Current generation for `user_id`; take it before reading the profile
    pub async fn generation(&self, user_id: i64) -> Generation {
        self.entries.read().await.generation(user_id)
    }

    /// Store a profile read while `seen` was current.
    ///
    /// Does nothing if the user was invalidated after `seen` was taken.
    pub async fn insert(&self, profile: Profile, seen: Generation) {
        let mut entries = self.entries.write().await;
        if entries.generation(profile.id) != seen {
            debug!(user_id = profile.id, "Skipped caching profile read before invalidation");
            return;
        }
        entries.profiles.insert(
            profile.id,
            CachedProfile {
                profile,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop a user's entry so the next read goes to the database
    pub async fn invalidate(&self, user_id: i64) {
        let mut entries = self.entries.write().await;
        *entries.generations.entry(user_id).or_insert(0) += 1;
        if entries.profiles.remove(&user_id).is_some() {
            debug!(user_id, "Invalidated cached profile");
        }
    }
}
