use std::sync::Arc;

use axum::{
    extract::Path, http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router,
};

use crate::{AppState, Result};

pub fn categories_handler() -> Router {
    Router::new()
        .route("/", get(get_categories))
        .route("/{slug}", get(category_view))
}

async fn get_categories(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let categories = app_state.posts_service.get_categories().await?;
    Ok((StatusCode::OK, Json(categories)))
}

async fn category_view(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let view = app_state.posts_service.category_view(&slug).await?;
    Ok((StatusCode::OK, Json(view)))
}
