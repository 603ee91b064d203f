//! rbtrace core - instrumented red-black tree
//!
//! This crate provides a red-black tree whose insert and delete operations
//! return their full history:
//! - Arena node model with id relations and "absent is black" semantics
//! - Insert and delete with classic fixups and rotations
//! - Immutable snapshot after every structural step, diffed against the previous one
//! - Operation records with labels and outcomes (applied or cancelled)
//! - Invariant validation, export rebuild and structure digests
//! - Command boundary with lifecycle logging

pub mod apply;
pub mod commands;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod recorder;
pub mod rules;
pub mod snapshot;
pub mod tree;

// Re-export commonly used types
pub use apply::{apply, Applied};
pub use commands::Command;
pub use diff::StructuralDiff;
pub use errors::{ExError, ExErrorKind, RbTraceError, Result};
pub use model::{Color, Node};
pub use recorder::{OperationKind, OperationOutcome, OperationRecord};
pub use snapshot::{NodeExport, Snapshot};
pub use tree::RbTree;
