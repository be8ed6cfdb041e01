use std::sync::Arc;

use spendcat_core::{CategoryStore, CoreError, QuestionDraft, QuestionStore};
use tracing::warn;

use super::error::{rejected, ApiError, ApiResult};
use super::request::{HttpMethod, HttpRequest};
use super::response::{HttpResponse, StatusCode, LOCATION};
use super::router::question_location;
use super::wire::{decode, QuestionPostRequest, StatusBody, TitleBody};

/// Serves `/categories/{cid}/questions` and `/categories/{cid}/questions/{id}`.
///
/// Category existence is checked here, against the category store, before
/// any write reaches the question store.
#[derive(Clone)]
pub struct QuestionHandler {
    categories: Arc<CategoryStore>,
    questions: Arc<QuestionStore>,
}

impl QuestionHandler {
    pub fn new(categories: Arc<CategoryStore>, questions: Arc<QuestionStore>) -> Self {
        Self {
            categories,
            questions,
        }
    }

    pub fn handle_collection(
        &self,
        request: &HttpRequest,
        category_id: &str,
    ) -> ApiResult<HttpResponse> {
        match request.method {
            HttpMethod::Get => Ok(self.list(category_id)),
            HttpMethod::Post => self.create(category_id, &request.body),
            _ => Err(ApiError::MethodNotAllowed),
        }
    }

    pub fn handle_item(
        &self,
        request: &HttpRequest,
        category_id: &str,
        id: &str,
    ) -> ApiResult<HttpResponse> {
        match request.method {
            HttpMethod::Get => self.get(category_id, id),
            HttpMethod::Patch => self.rename(category_id, id, &request.body),
            HttpMethod::Delete => self.delete(category_id, id),
            _ => Err(ApiError::MethodNotAllowed),
        }
    }

    pub fn list(&self, category_id: &str) -> HttpResponse {
        HttpResponse::json(StatusCode::OK, &self.questions.list_for_category(category_id))
    }

    pub fn get(&self, category_id: &str, id: &str) -> ApiResult<HttpResponse> {
        let question = self.questions.get(category_id, id)?;
        Ok(HttpResponse::json(StatusCode::OK, &question))
    }

    pub fn create(&self, category_id: &str, body: &[u8]) -> ApiResult<HttpResponse> {
        let request: QuestionPostRequest = decode(body)?;
        self.require_category(category_id)?;
        let question = self
            .questions
            .add(category_id, QuestionDraft::from(request))
            .map_err(rejected("create question"))?;
        Ok(HttpResponse::json(StatusCode::CREATED, &question).with_header(
            LOCATION,
            question_location(&question.category_id, &question.id),
        ))
    }

    pub fn rename(&self, category_id: &str, id: &str, body: &[u8]) -> ApiResult<HttpResponse> {
        let request: TitleBody = decode(body)?;
        self.require_category(category_id)?;
        let question = self
            .questions
            .rename(category_id, id, request.title.as_deref())
            .map_err(rejected("rename question"))?;
        Ok(HttpResponse::json(StatusCode::OK, &question))
    }

    pub fn delete(&self, category_id: &str, id: &str) -> ApiResult<HttpResponse> {
        self.require_category(category_id)?;
        self.questions
            .remove(category_id, id)
            .map_err(rejected("delete question"))?;
        Ok(HttpResponse::json(StatusCode::OK, &StatusBody::deleted()))
    }

    fn require_category(&self, category_id: &str) -> ApiResult<()> {
        if self.categories.contains(category_id) {
            Ok(())
        } else {
            warn!("category {} not found for question request", category_id);
            Err(ApiError::Core(CoreError::CategoryNotFound))
        }
    }
}

