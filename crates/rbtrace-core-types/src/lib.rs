//! Core types shared across rbtrace crates
//!
//! This crate provides foundational types used by the tree engine, the
//! logging facility and the CLI:
//!
//! - **Identifiers**: NodeId, SnapshotId, OperationId
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod schema;

pub use ids::{NodeId, OperationId, SnapshotId};
