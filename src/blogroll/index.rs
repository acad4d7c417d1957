use crate::model::Post;

/// A post paired with a render key that is unique within one listing.
///
/// Slugs repeat (two submissions of the same title, or titles that normalize
/// alike), so the key combines the slug with the post's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPost {
    pub key: String,
    pub position: usize,
    pub post: Post,
}

/// Assigns render keys to a listing, in order.
///
/// ```
/// use blogroll::index::index_posts;
/// use blogroll::model::Post;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let post = Post::new("Hi".into(), "A".into(), "News".into(), "x".into(), date);
/// let indexed = index_posts(vec![post.clone(), post]);
///
/// assert_eq!(indexed[0].key, "hi-0");
/// assert_eq!(indexed[1].key, "hi-1");
/// ```
pub fn index_posts(posts: Vec<Post>) -> Vec<DisplayPost> {
    posts
        .into_iter()
        .enumerate()
        .map(|(position, post)| DisplayPost {
            key: format!("{}-{}", post.slug, position),
            position,
            post,
        })
        .collect()
}
