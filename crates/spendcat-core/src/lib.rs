//! spendcat-core
//!
//! Category and question stores plus the validation rules that guard them.
//! Depends on spendcat-domain. No HTTP, no terminal I/O, no file access.

pub mod category_store;
pub mod draft;
pub mod error;
pub mod id;
pub mod question_store;
pub mod storage;
pub mod validation;

pub use category_store::CategoryStore;
pub use draft::{CategoryDraft, OptionsField, QuestionDraft};
pub use error::{CoreError, CoreResult};
pub use id::{IdGenerator, SequentialIds, TimeOrderedIds};
pub use question_store::QuestionStore;
pub use storage::{snapshot_warnings, SnapshotStorage, StorageError};
