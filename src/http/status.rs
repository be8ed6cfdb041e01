use super::error::{ApiError, ApiResult};
use super::request::{HttpMethod, HttpRequest};
use super::response::{HttpResponse, StatusCode};
use super::wire::StatusBody;

/// Liveness check: `GET /status` always answers `{"status":"OK"}`.
pub fn handle(request: &HttpRequest) -> ApiResult<HttpResponse> {
    match request.method {
        HttpMethod::Get => Ok(HttpResponse::json(StatusCode::OK, &StatusBody::ok())),
        _ => Err(ApiError::MethodNotAllowed),
    }
}
