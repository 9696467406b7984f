//! Tweet domain - DB queries for tweets
//!
//! All functions use the generic Executor pattern, allowing them to work with
//! both `&PgPool` (for standalone queries) and `&mut PgConnection` (for transactions).

use sqlx::{Executor, Postgres};

use super::super::models::{Cursor, FeedFilter, FeedRow, Tweet};

/// Fetch up to `take` feed rows strictly after `cursor`, newest first.
///
/// Like count and the viewer's like status come back in the same statement;
/// `liked_by_me` is false whenever `viewer` is `None`.
pub async fn fetch_feed_rows<'e, E>(
    executor: E,
    filter: FeedFilter,
    cursor: Option<Cursor>,
    take: i64,
    viewer: Option<i64>,
) -> Result<Vec<FeedRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let query = format!(
        r#"SELECT t.id, t.content, t.created_at,
                  (SELECT COUNT(*) FROM likes l WHERE l.tweet_id = t.id) AS like_count,
                  ($1::BIGINT IS NOT NULL AND EXISTS (
                      SELECT 1 FROM likes l WHERE l.tweet_id = t.id AND l.user_id = $1
                  )) AS liked_by_me,
                  u.id AS user_id, u.name AS user_name, u.image AS user_image
           FROM tweets t
           JOIN users u ON u.id = t.user_id
           WHERE ($2::TIMESTAMPTZ IS NULL OR (t.created_at, t.id) < ($2, $3::BIGINT)) {}
           ORDER BY t.created_at DESC, t.id DESC
           LIMIT $4"#,
        filter.where_clause(5)
    );

    let mut q = sqlx::query_as::<_, FeedRow>(&query)
        .bind(viewer)
        .bind(cursor.map(|c| c.created_at))
        .bind(cursor.map(|c| c.id))
        .bind(take);
    if let Some(subject) = filter.subject() {
        q = q.bind(subject);
    }

    q.fetch_all(executor).await
}

/// Insert a tweet owned by `user_id`
pub async fn insert_tweet<'e, E>(
    executor: E,
    user_id: i64,
    content: &str,
) -> Result<Tweet, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        INSERT INTO tweets (content, user_id)
        VALUES ($1, $2)
        RETURNING id, content, created_at, user_id
        "#,
    )
    .bind(content)
    .bind(user_id)
    .fetch_one(executor)
    .await
}
