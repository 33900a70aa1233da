use std::sync::Arc;

use axum::{
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{admin::admin_handler, categories::categories_handler, posts::posts_handler},
    models::response::Response,
    AppState,
};

pub fn create_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/healthz", get(health))
        .nest("/api/posts", posts_handler())
        .nest("/api/categories", categories_handler())
        .nest("/api/admin", admin_handler())
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    Json(Response {
        status: "success",
        message: "Lumina blog service is running.".to_string(),
    })
}

pub fn configure_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
