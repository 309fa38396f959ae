//! Application services for the read and write paths.

mod representation;
mod write;

pub use representation::RepresentationService;
pub use write::{
    SprintAttributes, SprintInput, TaskAttributes, TaskInput, WriteError, WriteResult,
    WriteService,
};
