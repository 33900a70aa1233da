use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Author {
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub role: String,
}

/// An article record. Authors are embedded by value; the category is a
/// free-text label matched against category slugs case-insensitively.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: Author,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(rename = "featuredImage")]
    pub featured_image: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    #[serde(rename = "isFeatured", default)]
    pub is_featured: bool,
    #[serde(rename = "isTrending", default)]
    pub is_trending: bool,
    pub views: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: String,
}

/// Draft fields submitted by the composer. Everything but title and content
/// falls back to a fixed default at publish time.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostDto {
    #[validate(length(min = 1, message = "Title is required."))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required."))]
    pub content: String,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "featuredImage")]
    pub featured_image: Option<String>,
    pub author: Option<Author>,
}

#[derive(Debug, Serialize)]
pub struct HomeFeed {
    pub featured: Option<Post>,
    pub trending: Vec<Post>,
    pub recent: Vec<Post>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct PostDetail {
    pub post: Post,
    pub related: Vec<Post>,
}

#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub category: Category,
    pub posts: Vec<Post>,
}
