/// Resource addressed by a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Status,
    Categories,
    Category(String),
    Questions(String),
    Question { category_id: String, id: String },
}

impl Route {
    /// Matches a path against the known resources. Query strings and a
    /// trailing slash are ignored; empty segments never match an id.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_start_matches('/').trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };
        if segments.iter().any(|segment| segment.is_empty()) {
            return None;
        }

        match segments.as_slice() {
            ["status"] => Some(Route::Status),
            ["categories"] => Some(Route::Categories),
            ["categories", id] => Some(Route::Category((*id).to_string())),
            ["categories", category_id, "questions"] => {
                Some(Route::Questions((*category_id).to_string()))
            }
            ["categories", category_id, "questions", id] => Some(Route::Question {
                category_id: (*category_id).to_string(),
                id: (*id).to_string(),
            }),
            _ => None,
        }
    }
}

pub fn category_location(id: &str) -> String {
    format!("/categories/{id}")
}

pub fn question_location(category_id: &str, id: &str) -> String {
    format!("/categories/{category_id}/questions/{id}")
}
