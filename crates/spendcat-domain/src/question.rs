//! Per-category questions and their enumerated answer options.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::*;

/// Answer shape a question expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Number,
    String,
}

impl QuestionType {
    /// Parses the wire label, returning `None` for anything unrecognised.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "number" => Some(QuestionType::Number),
            "string" => Some(QuestionType::String),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Number => "number",
            QuestionType::String => "string",
        }
    }

    /// Only free-text questions carry enumerated options.
    pub fn accepts_options(self) -> bool {
        matches!(self, QuestionType::String)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One enumerated answer choice owned by a question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionOption {
    pub id: String,
    pub title: String,
}

impl QuestionOption {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Identifiable for QuestionOption {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for QuestionOption {
    fn name(&self) -> &str {
        &self.title
    }
}

/// A configurable question attached to a category (e.g. "how many nights?").
///
/// `options` is `Some` only for [`QuestionType::String`] questions and is
/// omitted from the wire form otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub title: String,
    #[serde(rename = "categoryID")]
    pub category_id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category_id: impl Into<String>,
        kind: QuestionType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category_id: category_id.into(),
            kind,
            options: kind.accepts_options().then(Vec::new),
        }
    }

    pub fn with_options(mut self, options: Vec<QuestionOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn options(&self) -> &[QuestionOption] {
        self.options.as_deref().unwrap_or(&[])
    }
}

impl Identifiable for Question {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Question {
    fn name(&self) -> &str {
        &self.title
    }
}

impl BelongsToCategory for Question {
    fn category_id(&self) -> &str {
        &self.category_id
    }
}

/// Wire wrapper for question collections: `{"questions": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionList {
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl From<Vec<Question>> for QuestionList {
    fn from(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}
