//! # Post Providers
//!
//! The source of the initial posts and categories lives outside this crate's
//! core. [`PostProvider`] is the contract the controller consumes: two async
//! fetches, either of which may fail.
//!
//! ## Implementations
//!
//! - [`memory::StaticProvider`]: serves a fixed list, or a fixed failure.
//! - [`fs::JsonFileProvider`]: reads a JSON document of the form
//!   `{ "posts": [...], "categories": [...] }`.

use crate::error::Result;
use crate::model::Post;
use async_trait::async_trait;

pub mod fs;
pub mod memory;

#[async_trait]
pub trait PostProvider: Send + Sync {
    /// All posts, most recent first.
    async fn fetch_posts(&self) -> Result<Vec<Post>>;

    /// Category labels. May include "All", which the store discards.
    async fn fetch_categories(&self) -> Result<Vec<String>>;

    /// Posts and categories for one load. Posts are fetched first.
    ///
    /// Providers backed by a single document override this to read it once,
    /// so both halves come from the same version.
    async fn fetch_all(&self) -> Result<(Vec<Post>, Vec<String>)> {
        let posts = self.fetch_posts().await?;
        let categories = self.fetch_categories().await?;
        Ok((posts, categories))
    }
}
