use std::sync::Arc;

use spendcat_core::{CategoryStore, IdGenerator, QuestionStore, TimeOrderedIds};
use spendcat_domain::Snapshot;
use tracing::debug;

use super::categories::CategoryHandler;
use super::error::ApiError;
use super::questions::QuestionHandler;
use super::request::HttpRequest;
use super::response::HttpResponse;
use super::router::Route;
use super::status;

/// Routes requests to the category, question and status handlers.
///
/// Both stores are shared through `Arc`, so clones of a `Server` observe the
/// same catalogue.
#[derive(Clone)]
pub struct Server {
    categories: Arc<CategoryStore>,
    questions: Arc<QuestionStore>,
    category_handler: CategoryHandler,
    question_handler: QuestionHandler,
}

impl Server {
    pub fn new(categories: Arc<CategoryStore>, questions: Arc<QuestionStore>) -> Self {
        Self {
            category_handler: CategoryHandler::new(categories.clone(), questions.clone()),
            question_handler: QuestionHandler::new(categories.clone(), questions.clone()),
            categories,
            questions,
        }
    }

    /// Empty stores with time-ordered identifiers.
    pub fn in_memory() -> Self {
        Self::with_ids(Arc::new(TimeOrderedIds))
    }

    pub fn with_ids(ids: Arc<dyn IdGenerator>) -> Self {
        Self::new(
            Arc::new(CategoryStore::new(ids.clone())),
            Arc::new(QuestionStore::new(ids)),
        )
    }

    pub fn categories(&self) -> &Arc<CategoryStore> {
        &self.categories
    }

    pub fn questions(&self) -> &Arc<QuestionStore> {
        &self.questions
    }

    pub fn handle(&self, request: &HttpRequest) -> HttpResponse {
        debug!("{} {}", request.method, request.path);
        let result = match Route::parse(&request.path) {
            Some(Route::Status) => status::handle(request),
            Some(Route::Categories) => self.category_handler.handle_collection(request),
            Some(Route::Category(id)) => self.category_handler.handle_item(request, &id),
            Some(Route::Questions(category_id)) => self
                .question_handler
                .handle_collection(request, &category_id),
            Some(Route::Question { category_id, id }) => self
                .question_handler
                .handle_item(request, &category_id, &id),
            None => Err(ApiError::RouteNotFound),
        };
        let response = result.unwrap_or_else(ApiError::into_response);
        debug!("{} {} -> {}", request.method, request.path, response.status);
        response
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.categories.list().categories,
            self.questions.list_all().questions,
        )
    }

    /// Replaces both stores' contents; snapshot data is not re-validated.
    pub fn restore(&self, snapshot: Snapshot) {
        self.categories.replace_all(snapshot.categories);
        self.questions.replace_all(snapshot.questions);
    }
}

impl Default for Server {
    fn default() -> Self {
        Self::in_memory()
    }
}
