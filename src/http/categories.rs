use std::sync::Arc;

use spendcat_core::{CategoryDraft, CategoryStore, CoreError, QuestionStore};
use tracing::debug;

use super::error::{rejected, ApiError, ApiResult};
use super::request::{HttpMethod, HttpRequest};
use super::response::{HttpResponse, StatusCode, LOCATION};
use super::router::category_location;
use super::wire::{decode, CategoryGetResponse, CategoryPostRequest, NameBody, StatusBody};

/// Serves `/categories` and `/categories/{id}`.
#[derive(Clone)]
pub struct CategoryHandler {
    categories: Arc<CategoryStore>,
    questions: Arc<QuestionStore>,
}

impl CategoryHandler {
    pub fn new(categories: Arc<CategoryStore>, questions: Arc<QuestionStore>) -> Self {
        Self {
            categories,
            questions,
        }
    }

    pub fn handle_collection(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        match request.method {
            HttpMethod::Get => Ok(self.list()),
            HttpMethod::Post => self.create(&request.body),
            _ => Err(ApiError::MethodNotAllowed),
        }
    }

    pub fn handle_item(&self, request: &HttpRequest, id: &str) -> ApiResult<HttpResponse> {
        match request.method {
            HttpMethod::Get => self.get(id),
            HttpMethod::Patch => self.rename(id, &request.body),
            HttpMethod::Delete => self.delete(id),
            _ => Err(ApiError::MethodNotAllowed),
        }
    }

    pub fn list(&self) -> HttpResponse {
        HttpResponse::json(StatusCode::OK, &self.categories.list())
    }

    pub fn get(&self, id: &str) -> ApiResult<HttpResponse> {
        let category = self.categories.get(id)?;
        let children = self.categories.children(id);
        Ok(HttpResponse::json(
            StatusCode::OK,
            &CategoryGetResponse { category, children },
        ))
    }

    pub fn create(&self, body: &[u8]) -> ApiResult<HttpResponse> {
        let request: CategoryPostRequest = decode(body)?;
        let category = self
            .categories
            .add(CategoryDraft::from(request))
            .map_err(rejected("create category"))?;
        Ok(HttpResponse::json(StatusCode::CREATED, &category)
            .with_header(LOCATION, category_location(&category.id)))
    }

    pub fn rename(&self, id: &str, body: &[u8]) -> ApiResult<HttpResponse> {
        let request: NameBody = decode(body)?;
        let category = self
            .categories
            .rename(id, request.name.as_deref())
            .map_err(rejected("rename category"))?;
        Ok(HttpResponse::json(StatusCode::OK, &category))
    }

    /// Existence is checked first so `CategoryNotFound` wins over the
    /// children and question checks.
    pub fn delete(&self, id: &str) -> ApiResult<HttpResponse> {
        if !self.categories.contains(id) {
            return Err(ApiError::Core(CoreError::CategoryNotFound));
        }
        if !self.categories.children(id).is_empty() {
            debug!("category {} still has children", id);
            return Err(ApiError::Core(CoreError::CategoryHasChildren));
        }
        if self.questions.references_category(id) {
            debug!("category {} still referenced by questions", id);
            return Err(ApiError::Core(CoreError::CategoryHasQuestions));
        }
        self.categories.remove(id).map_err(rejected("delete category"))?;
        Ok(HttpResponse::json(StatusCode::OK, &StatusBody::deleted()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendcat_core::SequentialIds;

    fn handler() -> CategoryHandler {
        let ids = Arc::new(SequentialIds::new("c"));
        CategoryHandler::new(
            Arc::new(CategoryStore::new(ids.clone())),
            Arc::new(QuestionStore::new(ids)),
        )
    }

    #[test]
    fn create_then_get_includes_children() {
        let handler = handler();
        handler
            .create(br#"{"name":"accommodation","parentID":""}"#)
            .expect("parent");
        handler
            .create(br#"{"name":"hostel","parentID":"c-1"}"#)
            .expect("child");

        let response = handler.get("c-1").expect("get");
        let body: CategoryGetResponse = response.json_body().expect("body");

        assert_eq!(body.category.name, "accommodation");
        assert_eq!(body.children.len(), 1);
        assert_eq!(body.children[0].name, "hostel");
    }

    #[test]
    fn put_is_not_allowed_on_items() {
        let handler = handler();
        let request = HttpRequest::new(HttpMethod::Put, "/categories/1", Vec::new());

        assert_eq!(
            handler.handle_item(&request, "1").unwrap_err(),
            ApiError::MethodNotAllowed
        );
    }
}
