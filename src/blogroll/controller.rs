//! # View Controller
//!
//! The controller is the single owner of all mutable session state: the
//! [`PostStore`], the active category, the active search term, pending
//! validation errors and the derived list of visible posts.
//!
//! ## Phases
//!
//! ```text
//!   Loading ──load ok──▶ Ready ◀─┐ change_category / search / submit_post
//!      │                   └─────┘
//!      └──load failed──▶ Error (empty store, events still accepted)
//! ```
//!
//! ## Recomputation
//!
//! Every transition that touches the store, the category or the term ends in
//! one call to `recompute`, which re-runs [`filter::visible`] over the *full*
//! post sequence. The visible list is never patched in place, so repeated
//! filter changes cannot compound.
//!
//! Callers read state through [`ViewController::snapshot`], an owned copy.

use crate::config::BlogConfig;
use crate::error::{BlogError, Result};
use crate::filter;
use crate::index::{index_posts, DisplayPost};
use crate::model::{Post, ALL_CATEGORY};
use crate::provider::PostProvider;
use crate::store::PostStore;
use crate::validation::{FieldErrors, FormField, PostForm};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewPhase {
    Loading,
    Ready,
    Error,
}

/// Everything a renderer needs, detached from the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub phase: ViewPhase,
    pub active_category: String,
    pub search_term: String,
    pub visible_posts: Vec<Post>,
    /// "All" first, then data categories in first-seen order.
    pub categories: Vec<String>,
    pub errors: FieldErrors,
    pub load_error: Option<String>,
}

impl ViewSnapshot {
    pub fn loading(&self) -> bool {
        self.phase == ViewPhase::Loading
    }

    /// Visible posts with render keys.
    pub fn display_posts(&self) -> Vec<DisplayPost> {
        index_posts(self.visible_posts.clone())
    }

    /// Text for an empty listing, or `None` when something is visible.
    pub fn empty_message(&self) -> Option<String> {
        if !self.visible_posts.is_empty() {
            return None;
        }
        if self.search_term.is_empty() {
            Some("No posts found for this category.".to_string())
        } else {
            Some(format!("No posts found matching \"{}\"", self.search_term))
        }
    }
}

pub struct ViewController {
    store: PostStore,
    config: BlogConfig,
    phase: ViewPhase,
    active_category: String,
    search_term: String,
    visible: Vec<Post>,
    errors: FieldErrors,
    load_error: Option<String>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(BlogConfig::default())
    }
}

impl ViewController {
    pub fn new(config: BlogConfig) -> Self {
        Self {
            store: PostStore::new(),
            config,
            phase: ViewPhase::Loading,
            active_category: ALL_CATEGORY.to_string(),
            search_term: String::new(),
            visible: Vec::new(),
            errors: FieldErrors::new(),
            load_error: None,
        }
    }

    /// Seeds the store from `provider`, replacing any prior state.
    ///
    /// Uses [`PostProvider::fetch_all`]. A failure of either fetch leaves an
    /// empty store in the `Error` phase; it is logged and returned, never retried.
    pub async fn load<P: PostProvider + ?Sized>(&mut self, provider: &P) -> Result<()> {
        self.phase = ViewPhase::Loading;
        self.load_error = None;
        self.errors.clear_all();
        self.active_category = ALL_CATEGORY.to_string();
        self.search_term.clear();

        match provider.fetch_all().await {
            Ok((posts, categories)) => {
                self.store.load(posts, categories);
                self.phase = ViewPhase::Ready;
                self.recompute();
                info!(
                    posts = self.store.len(),
                    categories = self.store.categories().len(),
                    "posts loaded"
                );
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to load posts");
                self.store.clear();
                self.phase = ViewPhase::Error;
                self.load_error = Some(e.to_string());
                self.recompute();
                Err(BlogError::Load(e.to_string()))
            }
        }
    }

    pub fn change_category(&mut self, label: &str) -> Result<()> {
        self.ensure_loaded()?;
        debug!(category = label, "category changed");
        self.active_category = label.to_string();
        self.recompute();
        Ok(())
    }

    pub fn search(&mut self, term: &str) -> Result<()> {
        self.ensure_loaded()?;
        debug!(term, "search changed");
        self.search_term = term.to_string();
        self.recompute();
        Ok(())
    }

    /// Validates `form` and prepends the resulting post, dated today (UTC).
    ///
    /// On validation failure nothing is mutated except the pending errors,
    /// which are replaced by the new set and also returned.
    pub fn submit_post(&mut self, form: PostForm) -> Result<Post> {
        self.submit_post_dated(form, Utc::now().date_naive())
    }

    pub fn submit_post_dated(&mut self, form: PostForm, date: NaiveDate) -> Result<Post> {
        self.ensure_loaded()?;

        let post = match form.into_post(date, &self.config) {
            Ok(post) => post,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(BlogError::Validation(errors));
            }
        };

        self.errors.clear_all();
        if self.store.append(post.clone()) {
            debug!(category = %post.category, "category registered");
        }
        debug!(slug = %post.slug, "post submitted");
        self.recompute();
        Ok(post)
    }

    /// Clears the pending error for `field` once `value` is non-blank.
    pub fn touch_field(&mut self, field: FormField, value: &str) {
        if !value.trim().is_empty() {
            self.errors.clear(field);
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            phase: self.phase,
            active_category: self.active_category.clone(),
            search_term: self.search_term.clone(),
            visible_posts: self.visible.clone(),
            categories: self.store.categories().labels(),
            errors: self.errors.clone(),
            load_error: self.load_error.clone(),
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn visible_posts(&self) -> &[Post] {
        &self.visible
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    /// Categories a new post may be filed under ("All" excluded).
    pub fn categories_for_form(&self) -> Vec<String> {
        self.store.categories().data_labels().to_vec()
    }

    fn ensure_loaded(&self) -> Result<()> {
        match self.phase {
            ViewPhase::Loading => Err(BlogError::NotReady),
            ViewPhase::Ready | ViewPhase::Error => Ok(()),
        }
    }

    fn recompute(&mut self) {
        self.visible = filter::visible(
            self.store.posts(),
            &self.active_category,
            &self.search_term,
        );
    }
}
