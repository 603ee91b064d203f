//! Structural diff engine.
//!
//! Compares two consecutive snapshot exports and reports which nodes were
//! added, removed, recolored or relinked.
//!
//! ## Entry point
//!
//! ```ignore
//! use rbtrace_core::diff::engine::compute_diff;
//!
//! let diff = compute_diff(&previous.nodes, &current.nodes);
//! let summary = rbtrace_core::diff::human_summary::render_operation_summary(&record);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: every set is sorted by node id.
//! - **Independence**: recolor and relation changes are detected separately.
//! - **Purity**: neither input is modified.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::compute_diff;
pub use human_summary::render_operation_summary;
pub use model::StructuralDiff;
