use crate::model::ALL_CATEGORY;

/// Known data categories in first-seen order.
///
/// The reserved [`ALL_CATEGORY`] label is never stored; [`CategorySet::labels`]
/// puts it in front when building filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `label` unless it is already known or is the reserved "All".
    ///
    /// Returns `true` when the set grew.
    pub fn insert(&mut self, label: &str) -> bool {
        if label == ALL_CATEGORY || self.contains(label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Data categories only.
    pub fn data_labels(&self) -> &[String] {
        &self.labels
    }

    /// "All" followed by every data category.
    pub fn labels(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORY.to_string())
            .chain(self.labels.iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CategorySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = CategorySet::new();
        for label in iter {
            set.insert(label.as_ref());
        }
        set
    }
}
