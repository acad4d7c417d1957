use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The synthetic category label meaning "no filter".
///
/// It never appears on stored posts and is never added to a category set.
pub const ALL_CATEGORY: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Display identifier derived from the title. Not unique.
    pub slug: String,
    pub title: String,
    pub author: String,
    pub date: NaiveDate,
    pub category: String,
    pub excerpt: String,
    pub content: String,
}

impl Post {
    pub fn new(
        title: String,
        author: String,
        category: String,
        content: String,
        date: NaiveDate,
    ) -> Self {
        Self {
            slug: slugify(&title),
            title,
            author,
            date,
            category,
            excerpt: String::new(),
            content,
        }
    }

    pub fn with_excerpt(mut self, excerpt: String) -> Self {
        self.excerpt = excerpt;
        self
    }
}

/// Lower-cases `title` and replaces every run of whitespace with a single `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

/// First `length` characters of `content`, followed by `suffix`.
///
/// The suffix is appended even when the content is shorter than `length`.
pub fn default_excerpt(content: &str, length: usize, suffix: &str) -> String {
    let mut excerpt: String = content.chars().take(length).collect();
    excerpt.push_str(suffix);
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_joins_words() {
        assert_eq!(slugify("Hi"), "hi");
        assert_eq!(slugify("Intro to Tech"), "intro-to-tech");
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(slugify("Learning \t  React\nHooks"), "learning-react-hooks");
    }

    #[test]
    fn slug_keeps_untrimmed_edges() {
        assert_eq!(slugify(" Hi "), "-hi-");
    }

    #[test]
    fn excerpt_truncates_by_characters() {
        let content = "é".repeat(200);
        let excerpt = default_excerpt(&content, 120, "...");
        assert_eq!(excerpt.chars().count(), 123);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn excerpt_appends_suffix_to_short_content() {
        assert_eq!(default_excerpt("Hello world", 120, "..."), "Hello world...");
    }

    #[test]
    fn new_post_derives_slug() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let post = Post::new(
            "Hello There".into(),
            "A".into(),
            "News".into(),
            "Body".into(),
            date,
        );
        assert_eq!(post.slug, "hello-there");
        assert!(post.excerpt.is_empty());
    }
}
