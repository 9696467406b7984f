//! Application constants

/// Page size used when a feed request does not name one
pub const DEFAULT_FEED_LIMIT: i64 = 10;

/// Largest page a feed request may ask for
pub const MAX_FEED_LIMIT: i64 = 100;

/// Maximum tweet length in characters
pub const MAX_TWEET_CHARS: usize = 280;

/// Cookie carrying the session JWT
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
