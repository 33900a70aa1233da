use std::sync::Arc;

use axum::{
    extract::Path, http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router,
};

use crate::{AppState, Result};

pub fn posts_handler() -> Router {
    Router::new()
        .route("/", get(get_posts))
        .route("/home", get(home_feed))
        .route("/{slug}", get(post_detail))
}

async fn get_posts(Extension(app_state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let posts = app_state.posts_service.get_posts().await?;
    Ok((StatusCode::OK, Json(posts)))
}

async fn home_feed(Extension(app_state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let feed = app_state.posts_service.home_feed().await?;
    Ok((StatusCode::OK, Json(feed)))
}

async fn post_detail(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let detail = app_state.posts_service.post_detail(&slug).await?;
    Ok((StatusCode::OK, Json(detail)))
}
