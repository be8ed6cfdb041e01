use thiserror::Error;

/// Every way a catalogue operation can be rejected.
///
/// Each variant maps to one wire error title (see [`CoreError::title`]); the
/// HTTP layer owns the mapping to status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CoreError {
    #[error("a required field is missing")]
    FieldMissing,
    #[error("category name contains unsupported characters")]
    InvalidCategoryName,
    #[error("a category with that name already exists")]
    DuplicateCategoryName,
    #[error("parent category not found")]
    ParentIdNotFound,
    #[error("categories cannot be nested more than two levels deep")]
    CategoryTooNested,
    #[error("category not found")]
    CategoryNotFound,
    #[error("category still has child categories")]
    CategoryHasChildren,
    #[error("category is still referenced by questions")]
    CategoryHasQuestions,
    #[error("question title is empty")]
    TitleEmpty,
    #[error("question title contains unsupported characters")]
    InvalidTitle,
    #[error("a question with that title already exists")]
    DuplicateTitle,
    #[error("question type is empty")]
    TypeEmpty,
    #[error("question type is not recognised")]
    InvalidType,
    #[error("options must be a list of strings on a string question")]
    OptionsInvalid,
    #[error("option title is empty")]
    OptionEmpty,
    #[error("option titles must be unique")]
    DuplicateOption,
    #[error("question not found")]
    QuestionNotFound,
    #[error("question does not belong to category")]
    QuestionDoesntBelongToCategory,
}

impl CoreError {
    /// Stable error kind string used in `{"error": {"title": ...}}` bodies.
    pub fn title(self) -> &'static str {
        match self {
            CoreError::FieldMissing => "FieldMissing",
            CoreError::InvalidCategoryName => "InvalidCategoryName",
            CoreError::DuplicateCategoryName => "DuplicateCategoryName",
            CoreError::ParentIdNotFound => "ParentIDNotFound",
            CoreError::CategoryTooNested => "CategoryTooNested",
            CoreError::CategoryNotFound => "CategoryNotFound",
            CoreError::CategoryHasChildren => "CategoryHasChildren",
            CoreError::CategoryHasQuestions => "CategoryHasQuestions",
            CoreError::TitleEmpty => "TitleEmpty",
            CoreError::InvalidTitle => "InvalidTitle",
            CoreError::DuplicateTitle => "DuplicateTitle",
            CoreError::TypeEmpty => "TypeEmpty",
            CoreError::InvalidType => "InvalidType",
            CoreError::OptionsInvalid => "OptionsInvalid",
            CoreError::OptionEmpty => "OptionEmpty",
            CoreError::DuplicateOption => "DuplicateOption",
            CoreError::QuestionNotFound => "QuestionNotFound",
            CoreError::QuestionDoesntBelongToCategory => "QuestionDoesntBelongToCategory",
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
