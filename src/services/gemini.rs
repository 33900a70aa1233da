use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use crate::{
    models::generate::{GeneratedDraft, GeneratedImage, SeoReport},
    Error, Result,
};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// How much of the content body is handed to the SEO prompt.
const SEO_CONTENT_PREFIX: usize = 1000;

/// Thin client over the Gemini `generateContent` endpoint. Each call is a
/// single request: no retry, no timeout, no caching.
#[derive(Clone)]
pub struct GeminiService {
    client: reqwest::Client,
    api_key: String,
    text_model: String,
    image_model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

impl GeminiService {
    pub fn new(api_key: String, text_model: String, image_model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            text_model,
            image_model,
        }
    }

    /// Drafts a full post from a free-text topic. The declared response
    /// schema makes the service return the exact field set the composer
    /// form expects.
    pub async fn generate_draft(&self, topic: &str) -> Result<GeneratedDraft> {
        let body = json!({
            "contents": [{ "parts": [{ "text": format!(
                "Generate a high-quality blog post about: {topic}. Return a JSON object."
            ) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "excerpt": { "type": "STRING" },
                        "content": { "type": "STRING" },
                        "category": { "type": "STRING" },
                        "tags": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["title", "excerpt", "content", "category", "tags"]
                }
            }
        });

        let response = self.generate_content(&self.text_model, body).await?;
        draft_from_response(&response)
    }

    /// Requests one featured image for a title. `None` when the response
    /// carries no inline image part.
    pub async fn generate_image(&self, title: &str) -> Result<Option<GeneratedImage>> {
        let body = json!({
            "contents": [{ "parts": [{ "text": format!(
                "Generate a single striking featured image for a blog post titled \"{title}\"."
            ) }] }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"]
            }
        });

        let response = self.generate_content(&self.image_model, body).await?;
        Ok(image_from_response(&response))
    }

    pub async fn analyze_seo(&self, title: &str, content: &str) -> Result<SeoReport> {
        let prefix: String = content.chars().take(SEO_CONTENT_PREFIX).collect();
        let body = json!({
            "contents": [{ "parts": [{ "text": format!(
                "Analyze this blog post for SEO. Return a JSON object with a numeric \
                 score, a list of improvement suggestions, and a list of keywords. \
                 Title: {title}. Content: {prefix}"
            ) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "score": { "type": "INTEGER" },
                        "suggestions": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "keywords": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["score", "suggestions", "keywords"]
                }
            }
        });

        let response = self.generate_content(&self.text_model, body).await?;
        seo_from_response(&response)
    }

    async fn generate_content(&self, model: &str, body: Value) -> Result<GenerateContentResponse> {
        let url = format!("{GEMINI_ENDPOINT}/{model}:generateContent");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("Gemini call failed ({status}): {detail}");
            return Err(Error::GeminiResponse(format!(
                "Generative service returned {status}"
            )));
        }

        Ok(response.json().await?)
    }
}

fn first_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .iter()
        .filter_map(|c| c.content.as_ref())
        .flat_map(|c| c.parts.iter())
        .find_map(|p| p.text.as_deref())
}

fn draft_from_response(response: &GenerateContentResponse) -> Result<GeneratedDraft> {
    let text = first_text(response).ok_or_else(|| {
        Error::GeminiResponse("Generative service returned no text".to_string())
    })?;

    serde_json::from_str(text).map_err(|err| {
        error!("Unparseable draft payload: {err}");
        Error::GeminiResponse("Generative service returned malformed JSON".to_string())
    })
}

fn image_from_response(response: &GenerateContentResponse) -> Option<GeneratedImage> {
    response
        .candidates
        .iter()
        .filter_map(|c| c.content.as_ref())
        .flat_map(|c| c.parts.iter())
        .find_map(|p| p.inline_data.as_ref())
        .map(|inline| GeneratedImage {
            mime_type: inline.mime_type.clone(),
            data: inline.data.clone(),
        })
}

fn seo_from_response(response: &GenerateContentResponse) -> Result<SeoReport> {
    let text = first_text(response).ok_or_else(|| {
        Error::GeminiResponse("Generative service returned no text".to_string())
    })?;

    serde_json::from_str(text).map_err(|err| {
        error!("Unparseable SEO payload: {err}");
        Error::GeminiResponse("Generative service returned malformed JSON".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_text(text: &str) -> GenerateContentResponse {
        serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
        .unwrap()
    }

    #[test]
    fn draft_parses_schema_payload() {
        let payload = json!({
            "title": "Spatial Computing",
            "excerpt": "A short excerpt.",
            "content": "Body.",
            "category": "Technology",
            "tags": ["AR", "VR"]
        });
        let response = response_with_text(&payload.to_string());

        let draft = draft_from_response(&response).unwrap();
        assert_eq!(draft.title, "Spatial Computing");
        assert_eq!(draft.tags, vec!["AR", "VR"]);
    }

    #[test]
    fn draft_rejects_malformed_and_empty_payloads() {
        let malformed = response_with_text("not json");
        assert!(matches!(
            draft_from_response(&malformed),
            Err(Error::GeminiResponse(_))
        ));

        let empty: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(matches!(
            draft_from_response(&empty),
            Err(Error::GeminiResponse(_))
        ));
    }

    #[test]
    fn image_extracts_first_inline_payload() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Here is your image." },
                { "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } }
            ] } }]
        }))
        .unwrap();

        let image = image_from_response(&response).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "aGVsbG8=");
    }

    #[test]
    fn image_is_absent_when_no_inline_part() {
        let response = response_with_text("no image for you");
        assert!(image_from_response(&response).is_none());
    }

    #[test]
    fn seo_parses_score_and_lists() {
        let payload = json!({
            "score": 72,
            "suggestions": ["Shorten the title."],
            "keywords": ["seo", "blog"]
        });
        let response = response_with_text(&payload.to_string());

        let report = seo_from_response(&response).unwrap();
        assert_eq!(report.score, 72);
        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(report.keywords, vec!["seo", "blog"]);
    }
}
