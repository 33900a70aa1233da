pub mod admin;
pub mod categories;
pub mod posts;
