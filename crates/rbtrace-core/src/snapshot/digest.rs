//! Digest computation for snapshot exports.
//!
//! ## Determinism Guarantees
//!
//! - Same root and node records → same digest (canonical JSON serialization)
//! - Node order matters: exports are always produced in-order, so two
//!   structurally identical trees export and hash identically
//! - Descriptions, highlights and snapshot ids are not part of the digest

use crate::errors::Result;
use crate::snapshot::export::NodeExport;
use rbtrace_core_types::NodeId;
use sha2::{Digest, Sha256};

/// Compute the structure digest of an export.
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
///
/// ## Errors
///
/// Returns `RbTraceError::Serialization` if JSON serialization fails.
///
/// ## Example
///
/// ```no_run
/// use rbtrace_core::snapshot::digest::compute_structure_digest;
///
/// let digest = compute_structure_digest(None, &[]).unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn compute_structure_digest(root: Option<NodeId>, nodes: &[NodeExport]) -> Result<String> {
    let canonical = serde_json::to_string(&(root, nodes))?;
    Ok(hash_string(&canonical))
}

/// Hash a string using SHA256.
fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::export::export_tree;
    use crate::tree::RbTree;

    #[test]
    fn test_hash_string_deterministic() {
        let hash1 = hash_string("test");
        let hash2 = hash_string("test");
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_same_structure_same_digest() {
        let mut a = RbTree::new();
        let mut b = RbTree::new();
        for v in [3, 1, 2] {
            a.insert(v);
            b.insert(v);
        }
        let da = compute_structure_digest(a.root(), &export_tree(&a)).unwrap();
        let db = compute_structure_digest(b.root(), &export_tree(&b)).unwrap();
        assert_eq!(da, db);
    }

    #[test]
    fn test_recolor_changes_digest() {
        let mut tree = RbTree::new();
        tree.insert(1);
        let before = compute_structure_digest(tree.root(), &export_tree(&tree)).unwrap();
        tree.insert(2);
        let after = compute_structure_digest(tree.root(), &export_tree(&tree)).unwrap();
        assert_ne!(before, after);
    }
}
