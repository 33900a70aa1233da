use chrono::Utc;
use uuid::Uuid;

use crate::{
    models::posts::{Author, Category, CategoryView, CreatePostDto, HomeFeed, Post, PostDetail},
    repositories::{
        categories_repo::CategoriesRepository, posts_repo::PostsRepository, MemoryRepo,
    },
    Error, Result,
};

#[derive(Clone)]
pub struct PostsService {
    repo: MemoryRepo,
}

impl PostsService {
    pub fn new(repo: MemoryRepo) -> Self {
        Self { repo }
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>> {
        let posts = self.repo.get_posts().await?;

        Ok(posts)
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        let categories = self.repo.get_categories().await?;

        Ok(categories)
    }

    /// Hero is the first post flagged featured, falling back to the head of
    /// the list. Recent skips the hero and keeps the first six.
    pub async fn home_feed(&self) -> Result<HomeFeed> {
        let posts = self.repo.get_posts().await?;
        let categories = self.repo.get_categories().await?;

        let featured = posts
            .iter()
            .find(|p| p.is_featured)
            .or_else(|| posts.first())
            .cloned();

        let trending = posts.iter().filter(|p| p.is_trending).cloned().collect();

        let recent = match &featured {
            Some(hero) => posts
                .iter()
                .filter(|p| p.id != hero.id)
                .take(6)
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        Ok(HomeFeed {
            featured,
            trending,
            recent,
            categories,
        })
    }

    pub async fn post_detail(&self, slug: &str) -> Result<PostDetail> {
        let post = PostsRepository::find_by_slug(&self.repo, slug)
            .await?
            .ok_or(Error::NotFound)?;

        // Any three other posts in list order, no relevance ranking.
        let related = self
            .repo
            .get_posts()
            .await?
            .into_iter()
            .filter(|p| p.id != post.id)
            .take(3)
            .collect();

        Ok(PostDetail { post, related })
    }

    /// Posts belong to a category when their free-text label equals the
    /// route slug, ignoring case. Zero matches is a valid empty view.
    pub async fn category_view(&self, slug: &str) -> Result<CategoryView> {
        let category = CategoriesRepository::find_by_slug(&self.repo, slug)
            .await?
            .ok_or(Error::NotFound)?;

        let posts = self
            .repo
            .get_posts()
            .await?
            .into_iter()
            .filter(|p| p.category.eq_ignore_ascii_case(slug))
            .collect();

        Ok(CategoryView { category, posts })
    }

    pub async fn publish(&self, draft: CreatePostDto) -> Result<Post> {
        if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
            return Err(Error::BadRequest(
                "Please fill in required fields.".to_string(),
            ));
        }

        let id = Uuid::now_v7();
        let post = Post {
            id,
            slug: slugify(&draft.title),
            title: draft.title,
            excerpt: draft.excerpt.unwrap_or_default(),
            content: draft.content,
            author: draft.author.unwrap_or_else(default_author),
            category: draft.category.unwrap_or_else(|| "General".to_string()),
            tags: draft.tags.unwrap_or_default(),
            featured_image: draft.featured_image.unwrap_or_else(|| {
                format!("https://picsum.photos/seed/{}/1200/800", id.simple())
            }),
            published_at: Utc::now().format("%Y-%m-%d").to_string(),
            is_featured: false,
            is_trending: false,
            views: 0,
        };

        let post = self.repo.prepend_post(post).await?;

        Ok(post)
    }
}

/// Lowercases the title and collapses whitespace runs into hyphens.
/// Punctuation and non-ASCII pass through untouched; uniqueness is not
/// checked.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn default_author() -> Author {
    Author {
        name: "Admin User".to_string(),
        avatar: "https://picsum.photos/seed/admin/100/100".to_string(),
        bio: "Site administrator.".to_string(),
        role: "Editor".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::seed::{seed_categories, seed_posts};

    fn service() -> PostsService {
        PostsService::new(MemoryRepo::seeded())
    }

    fn draft(title: &str, content: &str) -> CreatePostDto {
        CreatePostDto {
            title: title.to_string(),
            content: content.to_string(),
            excerpt: None,
            category: None,
            tags: None,
            featured_image: None,
            author: None,
        }
    }

    #[test]
    fn slugify_replaces_whitespace_runs() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Hello   Big\tWorld"), "hello-big-world");
        assert_eq!(slugify("Rust & Friends!"), "rust-&-friends!");
    }

    #[tokio::test]
    async fn publish_prepends_completed_post() {
        let svc = service();
        let before = svc.get_posts().await.unwrap().len();

        let post = svc.publish(draft("Hello World", "Body text.")).await.unwrap();

        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.views, 0);
        assert_eq!(post.category, "General");
        assert_eq!(post.author.name, "Admin User");

        let posts = svc.get_posts().await.unwrap();
        assert_eq!(posts.len(), before + 1);
        assert_eq!(posts[0].id, post.id);
    }

    #[tokio::test]
    async fn publish_rejects_missing_required_fields() {
        let svc = service();
        let before = svc.get_posts().await.unwrap().len();

        assert!(matches!(
            svc.publish(draft("", "Body text.")).await,
            Err(Error::BadRequest(_))
        ));
        assert!(matches!(
            svc.publish(draft("A Title", "   ")).await,
            Err(Error::BadRequest(_))
        ));

        assert_eq!(svc.get_posts().await.unwrap().len(), before);
    }

    #[tokio::test]
    async fn home_hero_is_flagged_post_regardless_of_position() {
        let mut posts = seed_posts();
        posts.iter_mut().for_each(|p| p.is_featured = false);
        posts[2].is_featured = true;
        let hero_id = posts[2].id;

        let svc = PostsService::new(MemoryRepo::new(posts, seed_categories()));
        let feed = svc.home_feed().await.unwrap();

        assert_eq!(feed.featured.unwrap().id, hero_id);
    }

    #[tokio::test]
    async fn home_falls_back_to_first_post_and_skips_hero_in_recent() {
        let mut posts = seed_posts();
        posts.iter_mut().for_each(|p| p.is_featured = false);
        let first_id = posts[0].id;

        let svc = PostsService::new(MemoryRepo::new(posts, seed_categories()));
        let feed = svc.home_feed().await.unwrap();

        let hero = feed.featured.unwrap();
        assert_eq!(hero.id, first_id);
        assert!(feed.recent.iter().all(|p| p.id != hero.id));
        assert_eq!(feed.trending.len(), 2);
    }

    #[tokio::test]
    async fn category_view_matches_label_case_insensitively() {
        let svc = service();

        let view = svc.category_view("technology").await.unwrap();
        assert_eq!(view.category.name, "Technology");
        assert_eq!(view.posts.len(), 1);
        assert_eq!(view.posts[0].slug, "future-of-ai-creative");
    }

    #[tokio::test]
    async fn category_with_no_posts_is_an_explicit_empty_view() {
        let svc = service();

        let view = svc.category_view("business").await.unwrap();
        assert_eq!(view.category.slug, "business");
        assert!(view.posts.is_empty());
    }

    #[tokio::test]
    async fn unknown_slugs_are_not_found() {
        let svc = service();

        assert!(matches!(
            svc.category_view("gardening").await,
            Err(Error::NotFound)
        ));
        assert!(matches!(
            svc.post_detail("no-such-post").await,
            Err(Error::NotFound)
        ));
    }

    #[tokio::test]
    async fn detail_relates_three_other_posts_in_list_order() {
        let svc = service();
        svc.publish(draft("Extra One", "x")).await.unwrap();
        svc.publish(draft("Extra Two", "x")).await.unwrap();

        let detail = svc.post_detail("minimalism-aesthetic").await.unwrap();
        assert_eq!(detail.related.len(), 3);
        assert!(detail.related.iter().all(|p| p.slug != "minimalism-aesthetic"));
        // List order, newest first.
        assert_eq!(detail.related[0].slug, "extra-two");
    }
}
