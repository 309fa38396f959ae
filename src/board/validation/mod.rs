//! Write-path validation for sprints and tasks.

mod error;
pub mod rules;

pub(crate) use error::RejectionCollector;
pub use error::{Field, FieldRejection, RejectionReason, ValidationRejection};
pub use rules::{validate_sprint_end, validate_task_sprint};
