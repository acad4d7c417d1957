use super::PostProvider;
use crate::error::{BlogError, Result};
use crate::model::Post;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk shape of a provider document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogData {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Reads posts and categories from a JSON file.
///
/// The file is read on every fetch; nothing is cached and nothing is written.
/// [`PostProvider::fetch_all`] reads it once for both posts and categories.
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<BlogData> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| {
                BlogError::Provider(format!("cannot read {}: {}", self.path.display(), e))
            })?;
        let data: BlogData = serde_json::from_str(&content).map_err(BlogError::Serialization)?;
        Ok(data)
    }
}

#[async_trait]
impl PostProvider for JsonFileProvider {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        Ok(self.read().await?.posts)
    }

    async fn fetch_categories(&self) -> Result<Vec<String>> {
        Ok(self.read().await?.categories)
    }

    async fn fetch_all(&self) -> Result<(Vec<Post>, Vec<String>)> {
        let data = self.read().await?;
        Ok((data.posts, data.categories))
    }
}
