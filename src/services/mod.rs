pub mod gemini;
pub mod posts;
