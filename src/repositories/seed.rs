use uuid::Uuid;

use crate::models::posts::{Author, Category, Post};

pub fn seed_categories() -> Vec<Category> {
    vec![
        Category {
            id: "1".to_string(),
            name: "Technology".to_string(),
            slug: "technology".to_string(),
            description: "The latest in tech innovations.".to_string(),
            image: "https://picsum.photos/seed/tech/800/600".to_string(),
        },
        Category {
            id: "2".to_string(),
            name: "Lifestyle".to_string(),
            slug: "lifestyle".to_string(),
            description: "Curating the modern experience.".to_string(),
            image: "https://picsum.photos/seed/life/800/600".to_string(),
        },
        Category {
            id: "3".to_string(),
            name: "Design".to_string(),
            slug: "design".to_string(),
            description: "Aesthetics and creative systems.".to_string(),
            image: "https://picsum.photos/seed/design/800/600".to_string(),
        },
        Category {
            id: "4".to_string(),
            name: "Business".to_string(),
            slug: "business".to_string(),
            description: "Strategies for global impact.".to_string(),
            image: "https://picsum.photos/seed/business/800/600".to_string(),
        },
    ]
}

fn sarah() -> Author {
    Author {
        name: "Sarah Jenkins".to_string(),
        avatar: "https://picsum.photos/seed/sarah/100/100".to_string(),
        bio: "Design lead at Lumina, obsessed with minimalist architecture and AI systems."
            .to_string(),
        role: "Senior Editor".to_string(),
    }
}

pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: Uuid::now_v7(),
            title: "The Future of AI in Creative Industries".to_string(),
            slug: "future-of-ai-creative".to_string(),
            excerpt: "How generative models are redefining what it means to be a creator in the 21st century.".to_string(),
            content: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat...".to_string(),
            author: sarah(),
            category: "Technology".to_string(),
            tags: vec!["AI".to_string(), "Future".to_string(), "Tech".to_string()],
            featured_image: "https://picsum.photos/seed/ai-future/1200/800".to_string(),
            published_at: "2024-05-15".to_string(),
            is_featured: true,
            is_trending: false,
            views: 1240,
        },
        Post {
            id: Uuid::now_v7(),
            title: "Minimalism: More Than Just an Aesthetic".to_string(),
            slug: "minimalism-aesthetic".to_string(),
            excerpt: "Exploring the philosophy of less in an age of overwhelming digital noise.".to_string(),
            content: "The core of minimalism is not about owning nothing, but about making room for everything that matters...".to_string(),
            author: Author {
                name: "David Chen".to_string(),
                avatar: "https://picsum.photos/seed/david/100/100".to_string(),
                bio: "Lifestyle coach and minimalist enthusiast.".to_string(),
                role: "Contributor".to_string(),
            },
            category: "Lifestyle".to_string(),
            tags: vec!["Minimalism".to_string(), "Philosophy".to_string()],
            featured_image: "https://picsum.photos/seed/min/800/600".to_string(),
            published_at: "2024-05-12".to_string(),
            is_featured: false,
            is_trending: true,
            views: 890,
        },
        Post {
            id: Uuid::now_v7(),
            title: "The Evolution of Modern Typography".to_string(),
            slug: "evolution-typography".to_string(),
            excerpt: "Why fonts are the unsung heroes of digital communication and user experience.".to_string(),
            content: "From Gutenberg to Google Fonts, typography has undergone a radical transformation...".to_string(),
            author: sarah(),
            category: "Design".to_string(),
            tags: vec!["Type".to_string(), "Fonts".to_string()],
            featured_image: "https://picsum.photos/seed/type/800/600".to_string(),
            published_at: "2024-05-10".to_string(),
            is_featured: false,
            is_trending: true,
            views: 1540,
        },
    ]
}
