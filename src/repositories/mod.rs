use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::posts::{Category, Post};

pub mod categories_repo;
pub mod posts_repo;
pub mod seed;

/// Session-scoped store: one shared post list plus the static category set.
/// Nothing here survives a restart.
#[derive(Clone)]
pub struct MemoryRepo {
    posts: Arc<RwLock<Vec<Post>>>,
    categories: Arc<Vec<Category>>,
}

impl MemoryRepo {
    pub fn new(posts: Vec<Post>, categories: Vec<Category>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
            categories: Arc::new(categories),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_posts(), seed::seed_categories())
    }
}
