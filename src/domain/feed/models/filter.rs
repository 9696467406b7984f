//! Feed filters

/// Which tweets a feed draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFilter {
    /// Every tweet
    All,
    /// Tweets written by one user
    ByAuthor(i64),
    /// Tweets written by anyone the given user follows
    ByFollowedAuthors(i64),
}

impl FeedFilter {
    /// Filter for the home feed.
    ///
    /// Following-only mode needs a viewer; an anonymous viewer always gets the
    /// full feed, even when `only_following` is set.
    pub fn home(viewer: Option<i64>, only_following: bool) -> Self {
        match viewer {
            Some(viewer_id) if only_following => FeedFilter::ByFollowedAuthors(viewer_id),
            _ => FeedFilter::All,
        }
    }

    /// Filter for a user's profile feed
    pub fn profile(user_id: i64) -> Self {
        FeedFilter::ByAuthor(user_id)
    }

    /// Returns SQL WHERE clause fragment for this filter.
    ///
    /// The fragment references the filter subject as `$n`.
    pub(crate) fn where_clause(&self, n: usize) -> String {
        match self {
            FeedFilter::All => String::new(),
            FeedFilter::ByAuthor(_) => format!("AND t.user_id = ${n}"),
            FeedFilter::ByFollowedAuthors(_) => format!(
                "AND EXISTS (SELECT 1 FROM follows f WHERE f.follower_id = ${n} AND f.following_id = t.user_id)"
            ),
        }
    }

    /// The user id bound into the WHERE clause, if any
    pub(crate) fn subject(&self) -> Option<i64> {
        match self {
            FeedFilter::All => None,
            FeedFilter::ByAuthor(id) | FeedFilter::ByFollowedAuthors(id) => Some(*id),
        }
    }
}
