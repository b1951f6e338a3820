//! Filesystem side of scaffolding
//!
//! - `operation`: The action records a run emits
//! - `report`: Sinks that receive those records
//! - `materializer`: Idempotent, root-to-leaf directory creation
//! - `processor`: The scaffolder that applies a manifest

pub mod materializer;
pub mod operation;
pub mod processor;
pub mod report;

pub use materializer::DirectoryMaterializer;
pub use operation::ActionRecord;
pub use processor::{scaffold, ScaffoldOptions, Scaffolder};
pub use report::{JsonReporter, LineReporter, Reporter};
