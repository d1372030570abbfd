use std::fmt;

use indexmap::IndexSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Ordered set of CSS class names attached to a mark
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSet(IndexSet<String>);

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` when `enabled` is true, removes it otherwise
    pub fn classed(&mut self, name: &str, enabled: bool) {
        if enabled {
            self.0.insert(name.to_string());
        } else {
            self.0.shift_remove(name);
        }
    }

    pub fn with(mut self, name: &str) -> Self {
        self.classed(name, true);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for ClassSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
