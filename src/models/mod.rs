pub mod generate;
pub mod posts;
pub mod response;
