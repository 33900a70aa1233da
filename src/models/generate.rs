use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateDraftDto {
    #[validate(length(min = 1, message = "Topic is required."))]
    pub topic: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[validate(length(min = 1, message = "Title is required."))]
    pub title: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeSeoDto {
    #[validate(length(min = 1, message = "Title is required."))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required."))]
    pub content: String,
}

/// What the model returns for a draft request; mirrors the declared
/// response schema, so every field is required on the wire.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeneratedDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeneratedImage {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64 image bytes as delivered by the service.
    pub data: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SeoReport {
    pub score: i64,
    pub suggestions: Vec<String>,
    pub keywords: Vec<String>,
}
