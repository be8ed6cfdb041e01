//! JSON request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use spendcat_core::{CategoryDraft, OptionsField, QuestionDraft};
use spendcat_domain::Category;

use super::error::{ApiError, ApiResult};

/// Decodes a request body; anything that does not fit `T` is `InvalidJSON`.
pub fn decode<'a, T: Deserialize<'a>>(body: &'a [u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!("rejecting request body: {}", err);
        ApiError::InvalidJson
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryPostRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "parentID")]
    pub parent_id: Option<String>,
}

impl From<CategoryPostRequest> for CategoryDraft {
    fn from(request: CategoryPostRequest) -> Self {
        CategoryDraft {
            name: request.name,
            parent_id: request.parent_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NameBody {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TitleBody {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuestionPostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Kept loose so a wrongly shaped value reports `OptionsInvalid`
    /// instead of failing the whole body.
    #[serde(default)]
    pub options: Option<Value>,
}

impl From<QuestionPostRequest> for QuestionDraft {
    fn from(request: QuestionPostRequest) -> Self {
        QuestionDraft {
            title: request.title.unwrap_or_default(),
            kind: request.kind.unwrap_or_default(),
            options: options_field(request.options),
        }
    }
}

fn options_field(value: Option<Value>) -> OptionsField {
    match value {
        None | Some(Value::Null) => OptionsField::Absent,
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(title) => Some(title),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map_or(OptionsField::Malformed, OptionsField::Titles),
        Some(_) => OptionsField::Malformed,
    }
}

/// `GET /categories/{id}`: the category plus its direct children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGetResponse {
    #[serde(flatten)]
    pub category: Category,
    pub children: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTitle {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorTitle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

impl StatusBody {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}
