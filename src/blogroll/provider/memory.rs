use super::PostProvider;
use crate::error::{BlogError, Result};
use crate::model::Post;
use async_trait::async_trait;

/// Serves a fixed set of posts and categories from memory.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    posts: Vec<Post>,
    categories: Vec<String>,
    failure: Option<String>,
}

impl StaticProvider {
    pub fn new(posts: Vec<Post>, categories: Vec<String>) -> Self {
        Self {
            posts,
            categories,
            failure: None,
        }
    }

    /// A provider whose every fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(BlogError::Provider(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PostProvider for StaticProvider {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.check()?;
        Ok(self.posts.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<String>> {
        self.check()?;
        Ok(self.categories.clone())
    }
}
