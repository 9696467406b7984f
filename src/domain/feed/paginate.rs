//! Lookahead pagination.
//!
//! A page of `limit` rows is fetched as `limit + 1` rows ordered by a stable
//! composite key. If the extra row shows up there is more data, and the key of
//! the last row actually returned becomes the cursor for the next request.
//! Nothing here knows about the storage engine.

/// Split a lookahead fetch into the page and the key of its last row.
///
/// `rows` must already be ordered and hold at most `limit + 1` entries.
pub fn split_lookahead<T, K>(
    mut rows: Vec<T>,
    limit: usize,
    key: impl Fn(&T) -> K,
) -> (Vec<T>, Option<K>) {
    if rows.len() <= limit {
        return (rows, None);
    }
    rows.truncate(limit);
    let next = rows.last().map(key);
    (rows, next)
}
