//! # Post Storage
//!
//! [`PostStore`] holds the authoritative, session-scoped post sequence and the
//! set of known categories. Nothing here is persisted: the sequence is seeded
//! once from a [`crate::provider::PostProvider`] and only grows afterwards.
//!
//! ## Ordering
//!
//! Posts are kept most-recent-first. [`PostStore::append`] prepends, so a newly
//! authored post is always at position 0.
//!
//! ## Category Growth
//!
//! Appending a post whose category is not yet known registers that category as
//! part of the same call. Categories are never removed during a session.

use crate::model::Post;

pub mod categories;

pub use categories::CategorySet;

#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    categories: CategorySet,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any prior state with the provider's output.
    ///
    /// Category labels equal to "All" and repeated labels are dropped.
    pub fn load<S: AsRef<str>>(
        &mut self,
        posts: Vec<Post>,
        categories: impl IntoIterator<Item = S>,
    ) {
        self.posts = posts;
        self.categories = categories.into_iter().collect();
    }

    /// Drops every post and category. Used when the provider fails.
    pub fn clear(&mut self) {
        self.posts.clear();
        self.categories = CategorySet::new();
    }

    /// Inserts `post` at the front and registers its category if it is new.
    ///
    /// Slugs are not checked for uniqueness. Returns `true` when the category
    /// set grew.
    pub fn append(&mut self, post: Post) -> bool {
        let added = self.categories.insert(&post.category);
        self.posts.insert(0, post);
        added
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Post;
    use chrono::NaiveDate;

    pub fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    pub fn post(title: &str, author: &str, category: &str, content: &str) -> Post {
        Post::new(
            title.to_string(),
            author.to_string(),
            category.to_string(),
            content.to_string(),
            day(1),
        )
    }

    /// Four posts across "Tech" and "Life", most recent first.
    pub fn sample_posts() -> Vec<Post> {
        vec![
            post("Intro to Tech", "Ada", "Tech", "Where to start with hardware."),
            post("Intro to Life", "Bob", "Life", "Slow mornings and coffee."),
            post("Learning react", "Cy", "Tech", "Components all the way down."),
            post("Garden notes", "Ada", "Life", "Tomatoes need sun."),
        ]
    }

    pub fn sample_categories() -> Vec<String> {
        vec!["Tech".to_string(), "Life".to_string()]
    }
}
