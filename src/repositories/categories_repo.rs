use async_trait::async_trait;

use crate::{models::posts::Category, Result};

use super::MemoryRepo;

#[async_trait]
pub trait CategoriesRepository: Sync + Send {
    async fn get_categories(&self) -> Result<Vec<Category>>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>>;
}

#[async_trait]
impl CategoriesRepository for MemoryRepo {
    async fn get_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.as_ref().clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.slug == slug).cloned())
    }
}
