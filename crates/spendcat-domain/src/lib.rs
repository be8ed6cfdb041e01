//! spendcat-domain
//!
//! Pure domain models (Category, Question, QuestionOption, Snapshot).
//! No I/O, no HTTP, no storage. Only data types and their wire naming.

pub mod category;
pub mod common;
pub mod question;
pub mod snapshot;

pub use category::*;
pub use common::*;
pub use question::*;
pub use snapshot::*;
