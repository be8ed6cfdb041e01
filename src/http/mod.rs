//! Transport-neutral HTTP exposure of the category and question stores.
//!
//! A listener (or the request console) builds an [`HttpRequest`] and hands it
//! to [`Server::handle`]; every outcome, including failures, comes back as a
//! JSON [`HttpResponse`].

pub mod categories;
pub mod error;
pub mod questions;
pub mod request;
pub mod response;
pub mod router;
pub mod server;
pub mod status;
pub mod wire;

pub use categories::CategoryHandler;
pub use error::{core_status, ApiError, ApiResult};
pub use questions::QuestionHandler;
pub use request::{HttpMethod, HttpRequest};
pub use response::{HttpHeader, HttpResponse, StatusCode};
pub use router::Route;
pub use server::Server;
