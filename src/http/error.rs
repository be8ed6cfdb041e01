use spendcat_core::CoreError;
use thiserror::Error;

use super::response::{HttpResponse, StatusCode};
use super::wire::{ErrorBody, ErrorTitle};

/// Failures surfaced by the HTTP layer, including wrapped store rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request body is not valid JSON for this endpoint")]
    InvalidJson,
    #[error("no route matches the requested path")]
    RouteNotFound,
    #[error("method is not allowed on this path")]
    MethodNotAllowed,
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn title(self) -> &'static str {
        match self {
            ApiError::InvalidJson => "InvalidJSON",
            ApiError::RouteNotFound => "NotFound",
            ApiError::MethodNotAllowed => "MethodNotAllowed",
            ApiError::Core(err) => err.title(),
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Core(err) => core_status(err),
        }
    }

    pub fn into_response(self) -> HttpResponse {
        HttpResponse::json(
            self.status(),
            &ErrorBody {
                error: ErrorTitle {
                    title: self.title().to_string(),
                },
            },
        )
    }
}

/// Status code for every store rejection.
pub fn core_status(err: CoreError) -> StatusCode {
    match err {
        CoreError::FieldMissing
        | CoreError::TitleEmpty
        | CoreError::TypeEmpty
        | CoreError::InvalidType
        | CoreError::OptionsInvalid
        | CoreError::OptionEmpty
        | CoreError::DuplicateOption => StatusCode::BAD_REQUEST,
        CoreError::InvalidCategoryName
        | CoreError::ParentIdNotFound
        | CoreError::CategoryTooNested
        | CoreError::InvalidTitle => StatusCode::UNPROCESSABLE_ENTITY,
        CoreError::DuplicateCategoryName
        | CoreError::DuplicateTitle
        | CoreError::CategoryHasChildren
        | CoreError::CategoryHasQuestions => StatusCode::CONFLICT,
        CoreError::CategoryNotFound
        | CoreError::QuestionNotFound
        | CoreError::QuestionDoesntBelongToCategory => StatusCode::NOT_FOUND,
    }
}

/// Logs a store rejection and lifts it into an [`ApiError`].
pub(crate) fn rejected(action: &'static str) -> impl Fn(CoreError) -> ApiError {
    move |err| {
        tracing::warn!("{} rejected: {}", action, err.title());
        ApiError::Core(err)
    }
}

impl From<ApiError> for HttpResponse {
    fn from(err: ApiError) -> Self {
        err.into_response()
    }
}
