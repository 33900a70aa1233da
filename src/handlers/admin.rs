use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    models::{
        generate::{AnalyzeSeoDto, GenerateDraftDto, GenerateImageDto},
        posts::CreatePostDto,
    },
    AppState, Result,
};

pub fn admin_handler() -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(publish_post))
        .route("/generate", post(generate_draft))
        .route("/generate-image", post(generate_image))
        .route("/analyze-seo", post(analyze_seo))
}

/// Admin list view reads the live shared list, so freshly published posts
/// show up here immediately.
async fn list_posts(Extension(app_state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let posts = app_state.posts_service.get_posts().await?;
    Ok((StatusCode::OK, Json(posts)))
}

async fn publish_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(draft): Json<CreatePostDto>,
) -> Result<impl IntoResponse> {
    draft.validate()?;

    let post = app_state.posts_service.publish(draft).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn generate_draft(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(request): Json<GenerateDraftDto>,
) -> Result<impl IntoResponse> {
    request.validate()?;

    let draft = app_state
        .gemini_service
        .generate_draft(&request.topic)
        .await?;
    Ok((StatusCode::OK, Json(draft)))
}

async fn generate_image(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(request): Json<GenerateImageDto>,
) -> Result<impl IntoResponse> {
    request.validate()?;

    let image = app_state
        .gemini_service
        .generate_image(&request.title)
        .await?;
    Ok((StatusCode::OK, Json(image)))
}

async fn analyze_seo(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(request): Json<AnalyzeSeoDto>,
) -> Result<impl IntoResponse> {
    request.validate()?;

    let report = app_state
        .gemini_service
        .analyze_seo(&request.title, &request.content)
        .await?;
    Ok((StatusCode::OK, Json(report)))
}
