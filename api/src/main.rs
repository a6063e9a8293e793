use std::net::SocketAddr;

use axum::Router;
use diesel_async::{
    AsyncPgConnection,
    pooled_connection::{AsyncDieselConnectionManager, deadpool::Pool},
};
use dotenv::dotenv;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod comment;
mod config;
mod error;
mod identity;
mod json;
mod models;
mod schema;

use config::ServerConfig;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Clone)]
pub struct App {
    pub diesel: Pool<AsyncPgConnection>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());

    // JSON logs in production. Decided from the raw variable because building
    // the config itself wants a subscriber to log into.
    if matches!(std::env::var("ENVIRONMENT").as_deref(), Ok("production")) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config = ServerConfig::new_from_env();

    let pool_config =
        AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);
    let pool = Pool::builder(pool_config)
        .max_size(10)
        .build()
        .expect("couldn't build the database connection pool");

    let shared_state = App { diesel: pool };

    let app = Router::new()
        .nest("/comments", comment::routes::route())
        .with_state(shared_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        environment = config.env.as_str(),
        "listening on {addr}"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("couldn't bind the listen address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with an error");
}
