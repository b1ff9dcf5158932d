mod config;
mod db;
mod dtos;
mod error;
mod handler;
mod models;
mod routes;
mod service;
mod utils;

use std::sync::Arc;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use config::Config;
use db::listingdb::ListingStore;
use dotenv::dotenv;
use routes::create_router;
use tracing_subscriber::filter::LevelFilter;
use tower_http::cors::{AllowOrigin, CorsLayer};

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub store: Arc<ListingStore>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    dotenv().ok();

    let config = Config::init();

    let store = match ListingStore::seeded().and_then(|store| Ok((store.len()?, store))) {
        Ok((count, store)) => {
            println!("✅ Listing store seeded with {} listings", count);
            store
        }
        Err(err) => {
            println!("🔥 Failed to seed the listing store: {:?}", err);
            std::process::exit(1);
        }
    };

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    let app_state = Arc::new(AppState {
        env: config.clone(),
        store: Arc::new(store),
    });

    let app = create_router(app_state.clone()).layer(cors);

    println!("🚀 Server is running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}
