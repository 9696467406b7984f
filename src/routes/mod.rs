pub mod auth;
pub mod dto;
pub mod feed;
pub mod profiles;
pub mod tweets;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

use crate::AppState;

/// Build all routes for the API
pub fn build_routes() -> Router<Arc<AppState>> {
    // Rate limit writes per client IP: bursts of 20, then one every 2 seconds
    let rate_limit_config = GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(20)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .expect("Failed to build rate limit config");

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config.into(),
    };

    let writes = Router::new()
        .merge(tweets::routes())
        .merge(profiles::follow_routes())
        .layer(rate_limit_layer);

    Router::new()
        .route("/health", get(health))
        .merge(feed::routes())
        .merge(profiles::routes())
        .merge(writes)
}

async fn health() -> &'static str {
    "ok"
}
