//! Scratch Postgres databases for tests that run the real queries.
//!
//! These tests are `#[ignore]`d. Run them with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.
//! Each call to [`setup`] creates a fresh schema and loads `schema.sql` into it.

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

const SCHEMA_SQL: &str = include_str!("../../schema.sql");

static NEXT_SCHEMA: AtomicUsize = AtomicUsize::new(0);

pub async fn setup() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let schema = format!(
        "chirp_test_{}_{}_{}",
        std::process::id(),
        Utc::now().timestamp_micros(),
        NEXT_SCHEMA.fetch_add(1, Ordering::Relaxed)
    );

    let admin = PgPool::connect(&url).await.expect("Failed to connect to database");
    sqlx::query(&format!("CREATE SCHEMA {schema}"))
        .execute(&admin)
        .await
        .unwrap();
    admin.close().await;

    let options = PgConnectOptions::from_str(&url)
        .unwrap()
        .options([("search_path", schema.as_str())]);
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::raw_sql(SCHEMA_SQL).execute(&pool).await.unwrap();
    pool
}

pub async fn add_user(pool: &PgPool, id: i64) {
    sqlx::query("INSERT INTO users (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(format!("user{id}"))
        .execute(pool)
        .await
        .unwrap();
}

/// Insert a tweet with a fixed id and timestamp
pub async fn add_tweet(pool: &PgPool, id: i64, user_id: i64, created_at: DateTime<Utc>) {
    sqlx::query("INSERT INTO tweets (id, content, created_at, user_id) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(format!("tweet {id}"))
        .bind(created_at)
        .bind(user_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn follow(pool: &PgPool, follower_id: i64, following_id: i64) {
    sqlx::query("INSERT INTO follows (follower_id, following_id) VALUES ($1, $2)")
        .bind(follower_id)
        .bind(following_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn like(pool: &PgPool, user_id: i64, tweet_id: i64) {
    sqlx::query("INSERT INTO likes (user_id, tweet_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(tweet_id)
        .execute(pool)
        .await
        .unwrap();
}
