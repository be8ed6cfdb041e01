#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use serde_json::Value;
use spendcat::http::{HttpMethod, HttpRequest, HttpResponse, Server};
use spendcat_core::{CategoryStore, QuestionStore, SequentialIds};
use spendcat_domain::{Category, Question, QuestionOption, QuestionType};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Fresh directory that outlives the calling test.
pub fn temp_home() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Server seeded with `categories` and `questions`; new IDs read `new-1`, `new-2`, ...
pub fn server_with(categories: Vec<Category>, questions: Vec<Question>) -> Server {
    let ids = Arc::new(SequentialIds::new("new"));
    Server::new(
        Arc::new(CategoryStore::with_categories(categories, ids.clone())),
        Arc::new(QuestionStore::with_questions(questions, ids)),
    )
}

pub fn accommodation_tree() -> Vec<Category> {
    vec![
        Category::new("1234", "accommodation"),
        Category::new("2345", "food and drink"),
        Category::new("abcdef", "hostel").with_parent("1234"),
        Category::new("ghijkm", "apartment").with_parent("1234"),
    ]
}

pub fn number_question(id: &str, title: &str, category_id: &str) -> Question {
    Question::new(id, title, category_id, QuestionType::Number)
}

pub fn meal_question(id: &str, category_id: &str) -> Question {
    Question::new(id, "which meal?", category_id, QuestionType::String).with_options(vec![
        QuestionOption::new("1", "breakfast"),
        QuestionOption::new("2", "lunch"),
        QuestionOption::new("3", "dinner"),
    ])
}

pub fn send(server: &Server, method: HttpMethod, path: &str, body: &str) -> HttpResponse {
    server.handle(&HttpRequest::new(method, path, body.as_bytes().to_vec()))
}

pub fn body_json(response: &HttpResponse) -> Value {
    response.json_body().expect("response body is JSON")
}

pub fn assert_json_response(response: &HttpResponse) {
    assert_eq!(response.header("Content-Type"), Some("application/json"));
}

/// Asserts status, content type and the `{"error":{"title":...}}` envelope.
pub fn assert_error(response: &HttpResponse, status: u16, title: &str) {
    assert_eq!(response.status.as_u16(), status, "body: {}", response.body_str());
    assert_json_response(response);
    assert_eq!(body_json(response)["error"]["title"], title);
}
