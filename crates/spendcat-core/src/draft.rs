//! Unvalidated input for store writes.
//!
//! Drafts keep "absent" distinct from "empty" so the stores can report
//! `FieldMissing` separately from format errors.

/// Proposed category as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: Option<String>,
    pub parent_id: Option<String>,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            parent_id: Some(parent_id.into()),
        }
    }

    /// Draft for a top-level category (explicit empty parent).
    pub fn top_level(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }
}

/// Shape of the `options` value supplied with a new question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionsField {
    /// Key absent or explicitly null.
    #[default]
    Absent,
    /// A list where every element was a string.
    Titles(Vec<String>),
    /// Present, but not a list of strings.
    Malformed,
}

/// Proposed question as received from a caller.
///
/// `title` and `kind` are raw strings; missing keys arrive as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub title: String,
    pub kind: String,
    pub options: OptionsField,
}

impl QuestionDraft {
    pub fn new(title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
            options: OptionsField::Absent,
        }
    }

    pub fn with_options<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = OptionsField::Titles(titles.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_malformed_options(mut self) -> Self {
        self.options = OptionsField::Malformed;
        self
    }
}
