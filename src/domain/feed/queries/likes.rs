//! Like domain - DB queries for the (user_id, tweet_id) likes relation

use sqlx::{Executor, Postgres};

/// Whether `user_id` currently likes `tweet_id`
pub async fn like_exists<'e, E>(executor: E, user_id: i64, tweet_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let row: Option<(i64,)> =
        sqlx::query_as("SELECT tweet_id FROM likes WHERE user_id = $1 AND tweet_id = $2")
            .bind(user_id)
            .bind(tweet_id)
            .fetch_optional(executor)
            .await?;

    Ok(row.is_some())
}

/// Insert a like. Fails with a unique violation if it already exists.
pub async fn insert_like<'e, E>(executor: E, user_id: i64, tweet_id: i64) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query("INSERT INTO likes (user_id, tweet_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(tweet_id)
        .execute(executor)
        .await?;

    Ok(())
}

/// Delete a like. Returns true if a row was removed.
pub async fn delete_like<'e, E>(executor: E, user_id: i64, tweet_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND tweet_id = $2")
        .bind(user_id)
        .bind(tweet_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
