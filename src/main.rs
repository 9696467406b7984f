mod config;
mod constants;
mod domain;
mod routes;
mod services;

use axum::http::{HeaderValue, Method, header};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use domain::feed::PgFeedStore;
use services::cache::ProfileCache;

pub struct AppState {
    db: PgPool,
    feed: PgFeedStore,
    jwt_secret: Vec<u8>,
    profile_cache: ProfileCache,
}

impl AppState {
    fn new(db: PgPool, jwt_secret: Vec<u8>, profile_cache_ttl: Duration) -> Self {
        Self {
            feed: PgFeedStore::new(db.clone()),
            db,
            jwt_secret,
            profile_cache: ProfileCache::new(profile_cache_ttl),
        }
    }
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    // Without an explicit origin only same-origin requests are served
    let Some(origin) = origin else {
        return CorsLayer::new();
    };

    CorsLayer::new()
        .allow_origin(
            origin
                .parse::<HeaderValue>()
                .expect("CORS_ORIGIN must be a valid header value"),
        )
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let state = Arc::new(AppState::new(
        pool,
        config.jwt_secret.into_bytes(),
        config.profile_cache_ttl,
    ));

    let app = routes::build_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.cors_origin.as_deref()))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", addr, e));

    info!("Listening on http://{}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server failed");
}
