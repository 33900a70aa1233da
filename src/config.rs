use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub text_model: String,
    pub image_model: String,
}

impl Config {
    pub fn init() -> Config {
        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
            panic!("🔒 GEMINI_API_KEY environment variable must be set and non-empty!");
        });

        if gemini_api_key.is_empty() {
            panic!("🔒 GEMINI_API_KEY cannot be empty!");
        }

        Config {
            gemini_api_key,
            text_model: env::var("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),
            image_model: env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash-preview-image-generation".to_string()),
        }
    }
}
