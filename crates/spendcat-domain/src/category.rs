//! Domain types representing spending categories.

use serde::{Deserialize, Serialize};

use crate::common::*;

/// A node in the two-level spending hierarchy (e.g. "accommodation" -> "hostel").
///
/// An empty `parent_id` marks a top-level category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "parentID", default)]
    pub parent_id: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: String::new(),
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = parent_id.into();
        self
    }

    /// Returns `true` when the category sits at the top of the hierarchy.
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_empty()
    }

    /// Returns `true` when `parent_id` names this category's direct parent.
    pub fn is_child_of(&self, parent_id: &str) -> bool {
        !self.parent_id.is_empty() && self.parent_id == parent_id
    }
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Wire wrapper for category collections: `{"categories": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryList {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl From<Vec<Category>> for CategoryList {
    fn from(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}
