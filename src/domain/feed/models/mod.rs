//! Feed domain models

mod cursor;
mod filter;
mod tweet;

pub use cursor::{Cursor, PageRequest};
pub use filter::FeedFilter;
pub use tweet::{Author, FeedRow, FeedTweet, Tweet};

/// One page of a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage {
    pub tweets: Vec<FeedTweet>,
    /// Absent once the feed is exhausted
    pub next_cursor: Option<Cursor>,
}
