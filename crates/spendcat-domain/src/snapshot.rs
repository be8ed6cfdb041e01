//! Point-in-time copy of both stores, used for seeding and export.

use serde::{Deserialize, Serialize};

use crate::{category::Category, question::Question};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Snapshot {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        Self {
            categories,
            questions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.questions.is_empty()
    }
}
