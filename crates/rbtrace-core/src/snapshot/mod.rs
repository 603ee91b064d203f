//! Snapshot capture.
//!
//! ## Responsibilities
//!
//! - Export the live tree into immutable, id-addressed node records
//! - Rebuild and validate a graph from such records
//! - Compute deterministic structure digests
//!
//! ## Non-Responsibilities
//!
//! - Diffing (handled by `diff`)
//! - Ordering snapshots into an operation history (handled by `recorder`)

pub mod digest;
pub mod export;
pub mod model;
pub mod rebuild;

use rbtrace_core_types::NodeId;

// Re-export primary types
pub use digest::compute_structure_digest;
pub use export::{export_tree, NodeExport};
pub use model::Snapshot;
pub use rebuild::{ExportedTree, TreeShape};

/// Anything the recorder can capture a snapshot from
pub trait SnapshotSource {
    /// Current root, if any
    fn root(&self) -> Option<NodeId>;

    /// Export every live node, reachable nodes first in in-order sequence
    fn export(&self) -> Vec<NodeExport>;

    /// Whether `id` is a live node
    fn contains(&self, id: NodeId) -> bool;
}
