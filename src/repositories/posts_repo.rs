use async_trait::async_trait;

use crate::{models::posts::Post, Result};

use super::MemoryRepo;

#[async_trait]
pub trait PostsRepository: Sync + Send {
    async fn get_posts(&self) -> Result<Vec<Post>>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>>;
    /// Inserts at the head of the list; the new post is visible to every
    /// subsequent read.
    async fn prepend_post(&self, post: Post) -> Result<Post>;
}

#[async_trait]
impl PostsRepository for MemoryRepo {
    async fn get_posts(&self) -> Result<Vec<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn prepend_post(&self, post: Post) -> Result<Post> {
        let mut posts = self.posts.write().await;
        posts.insert(0, post.clone());
        Ok(post)
    }
}
