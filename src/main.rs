use std::{env, sync::Arc};

use config::Config;
use repositories::MemoryRepo;
use routes::{configure_cors, create_routes};
use services::{gemini::GeminiService, posts::PostsService};

pub use self::errors::{Error, Result};

mod config;
mod errors;
mod handlers;
mod models;
mod repositories;
mod routes;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub posts_service: PostsService,
    pub gemini_service: GeminiService,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::init();

    let repo = MemoryRepo::seeded();

    let app_state = AppState {
        posts_service: PostsService::new(repo),
        gemini_service: GeminiService::new(
            config.gemini_api_key.clone(),
            config.text_model.clone(),
            config.image_model.clone(),
        ),
        config,
    };

    let app = create_routes(Arc::new(app_state)).layer(configure_cors());

    let addr = format!(
        "[::]:{}",
        env::var("PORT").unwrap_or_else(|_| "8080".to_string())
    );
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
