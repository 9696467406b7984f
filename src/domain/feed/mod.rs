//! Feed domain - infinite feeds over tweets, plus the tweet and like mutations

pub mod engine;
pub mod error;
pub mod models;
pub mod paginate;
pub mod queries;
pub mod store;

#[cfg(test)]
pub(crate) mod memory;

pub use engine::{create_tweet, get_page, toggle_like};
pub use error::{FeedError, StoreError};
pub use models::*;
pub use store::PgFeedStore;
