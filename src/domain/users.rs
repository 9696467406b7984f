//! User domain - DB queries for profiles and follows
//!
//! All functions use the generic Executor pattern, allowing them to work with
//! both `&PgPool` (for standalone queries) and `&mut PgConnection` (for transactions).

use sqlx::{Executor, PgPool, Postgres};

/// Public profile summary with derived counts (viewer independent)
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Profile {
    pub id: i64,
    pub name: Option<String>,
    pub image: Option<String>,
    pub tweets_count: i64,
    pub followers_count: i64,
    pub follows_count: i64,
}

/// Get a profile with its tweet, follower and following counts
pub async fn get_profile<'e, E>(executor: E, user_id: i64) -> Result<Option<Profile>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        SELECT u.id, u.name, u.image,
               (SELECT COUNT(*) FROM tweets t WHERE t.user_id = u.id) AS tweets_count,
               (SELECT COUNT(*) FROM follows f WHERE f.following_id = u.id) AS followers_count,
               (SELECT COUNT(*) FROM follows f WHERE f.follower_id = u.id) AS follows_count
        FROM users u
        WHERE u.id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

/// Whether `follower_id` follows `following_id`
pub async fn is_following<'e, E>(
    executor: E,
    follower_id: i64,
    following_id: i64,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let (exists,): (bool,) = sqlx::query_as(
        "SELECT EXISTS (SELECT 1 FROM follows WHERE follower_id = $1 AND following_id = $2)",
    )
    .bind(follower_id)
    .bind(following_id)
    .fetch_one(executor)
    .await?;

    Ok(exists)
}

/// Follow or unfollow `following_id`. Returns true if the follow exists afterwards.
///
/// Runs in one transaction: an existing follow is deleted, otherwise one is
/// inserted. `ON CONFLICT DO NOTHING` absorbs a concurrent duplicate follow.
/// A missing target user fails with a foreign key violation.
pub async fn toggle_follow(
    db: &PgPool,
    follower_id: i64,
    following_id: i64,
) -> Result<bool, sqlx::Error> {
    let mut tx = db.begin().await?;

    let removed = sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND following_id = $2")
        .bind(follower_id)
        .bind(following_id)
        .execute(&mut *tx)
        .await?;

    if removed.rows_affected() == 0 {
        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, following_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(follower_id)
        .bind(following_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(removed.rows_affected() == 0)
}
