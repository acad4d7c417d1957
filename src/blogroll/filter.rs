//! # Filter Engine
//!
//! Pure computation of the visible subset of posts. Nothing here mutates its
//! input or keeps state between calls.
//!
//! Two filters compose, category first:
//!
//! 1. **Category**: unless the active category is "All", keep posts whose
//!    `category` equals it exactly (case-sensitive).
//! 2. **Search**: unless the term is blank, keep posts whose title, content or
//!    author contains the term, compared case-insensitively.
//!
//! Both filters preserve the relative order of their input and are idempotent.

use crate::model::{Post, ALL_CATEGORY};

/// Category selection for a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORY {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn matches(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => post.category == *category,
        }
    }
}

/// A category selection plus an optional case-folded search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFilter {
    category: CategoryFilter,
    term: Option<String>,
}

impl PostFilter {
    pub fn new(category: &str, term: &str) -> Self {
        // Blank terms disable the search; anything else matches literally.
        Self {
            category: CategoryFilter::from_label(category),
            term: (!term.trim().is_empty()).then(|| term.to_lowercase()),
        }
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.category.matches(post) && self.matches_term(post)
    }

    fn matches_term(&self, post: &Post) -> bool {
        let Some(term) = &self.term else {
            return true;
        };
        post.title.to_lowercase().contains(term)
            || post.content.to_lowercase().contains(term)
            || post.author.to_lowercase().contains(term)
    }

    pub fn apply(&self, posts: &[Post]) -> Vec<Post> {
        posts.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// The posts visible under `category` and `term`, in their original order.
pub fn visible(posts: &[Post], category: &str, term: &str) -> Vec<Post> {
    PostFilter::new(category, term).apply(posts)
}
