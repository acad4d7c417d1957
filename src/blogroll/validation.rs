//! Validation of user-authored posts.
//!
//! A post can be built from a [`PostForm`] only when title, author, category
//! and content are all non-blank. Failures come back as [`FieldErrors`], one
//! message per missing field, keyed by [`FormField`].

use crate::config::BlogConfig;
use crate::model::{default_excerpt, Post};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A field of the new-post form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Author,
    Category,
    Excerpt,
    Content,
}

impl FormField {
    /// Fields that must be non-blank, in form order.
    pub const REQUIRED: [FormField; 4] = [
        FormField::Title,
        FormField::Author,
        FormField::Category,
        FormField::Content,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Author => "author",
            FormField::Category => "category",
            FormField::Excerpt => "excerpt",
            FormField::Content => "content",
        }
    }

    /// Message shown when a required field is blank. `None` for optional fields.
    pub fn missing_message(&self) -> Option<&'static str> {
        match self {
            FormField::Title => Some("Please enter a title"),
            FormField::Author => Some("Please enter your name"),
            FormField::Category => Some("Please select a category"),
            FormField::Content => Some("Content cannot be empty"),
            FormField::Excerpt => None,
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw field values as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub title: String,
    pub author: String,
    pub category: String,
    pub excerpt: Option<String>,
    pub content: String,
}

impl PostForm {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category: category.into(),
            excerpt: None,
            content: content.into(),
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Category => &self.category,
            FormField::Excerpt => self.excerpt.as_deref().unwrap_or_default(),
            FormField::Content => &self.content,
        }
    }

    /// Validates the form and builds a post dated `date`.
    ///
    /// Field values are kept as entered; only the blank check trims them. An
    /// absent or empty excerpt is generated from the content.
    pub fn into_post(self, date: NaiveDate, config: &BlogConfig) -> Result<Post, FieldErrors> {
        validate(&self)?;

        let excerpt = match self.excerpt {
            Some(excerpt) if !excerpt.is_empty() => excerpt,
            _ => default_excerpt(&self.content, config.excerpt_length, &config.excerpt_suffix),
        };

        Ok(Post::new(self.title, self.author, self.category, self.content, date)
            .with_excerpt(excerpt))
    }
}

/// Field-keyed validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drops the message for `field`, returning whether one was present.
    pub fn clear(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Checks that every required field is non-blank after trimming.
pub fn validate(form: &PostForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in FormField::REQUIRED {
        if form.value(field).trim().is_empty() {
            if let Some(message) = field.missing_message() {
                errors.insert(field, message);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn complete_form_passes() {
        let form = PostForm::new("Hi", "A", "News", "Hello world");
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn reports_only_missing_fields() {
        let form = PostForm::new("", "A", "News", "x");
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Title), Some("Please enter a title"));
    }

    #[test]
    fn whitespace_counts_as_blank() {
        let form = PostForm::new("  ", "\t", "News", " \n ");
        let errors = validate(&form).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![FormField::Title, FormField::Author, FormField::Content]
        );
        assert_eq!(errors.get(FormField::Author), Some("Please enter your name"));
        assert_eq!(errors.get(FormField::Content), Some("Content cannot be empty"));
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&PostForm::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get(FormField::Category),
            Some("Please select a category")
        );
        assert!(!errors.contains(FormField::Excerpt));
    }

    #[test]
    fn display_joins_messages() {
        let errors = validate(&PostForm::new("", "", "News", "x")).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "title: Please enter a title; author: Please enter your name"
        );
    }

    #[test]
    fn into_post_generates_slug_date_and_excerpt() {
        let post = PostForm::new("Hi", "A", "News", "Hello world")
            .into_post(today(), &BlogConfig::default())
            .unwrap();

        assert_eq!(post.slug, "hi");
        assert_eq!(post.date, today());
        assert_eq!(post.excerpt, "Hello world...");
    }

    #[test]
    fn into_post_keeps_supplied_excerpt() {
        let post = PostForm::new("Hi", "A", "News", "Hello world")
            .with_excerpt("Short")
            .into_post(today(), &BlogConfig::default())
            .unwrap();
        assert_eq!(post.excerpt, "Short");
    }

    #[test]
    fn empty_excerpt_is_treated_as_absent() {
        let post = PostForm::new("Hi", "A", "News", "Hello world")
            .with_excerpt("")
            .into_post(today(), &BlogConfig::default())
            .unwrap();
        assert_eq!(post.excerpt, "Hello world...");
    }

    #[test]
    fn excerpt_respects_configured_length() {
        let config = BlogConfig {
            excerpt_length: 5,
            excerpt_suffix: "…".to_string(),
            ..BlogConfig::default()
        };
        let post = PostForm::new("Hi", "A", "News", "Hello world")
            .into_post(today(), &config)
            .unwrap();
        assert_eq!(post.excerpt, "Hello…");
    }

    #[test]
    fn into_post_rejects_invalid_form() {
        let result = PostForm::new("Hi", "", "News", "x").into_post(today(), &BlogConfig::default());
        assert!(result.unwrap_err().contains(FormField::Author));
    }

    #[test]
    fn form_deserializes_with_missing_fields() {
        let form: PostForm = serde_json::from_str(r#"{"title":"Hi","content":"x"}"#).unwrap();
        assert_eq!(form.title, "Hi");
        assert!(form.author.is_empty());
        assert!(form.excerpt.is_none());
    }
}
