use rbtrace_core_types::NodeId;

use super::RbTree;
use crate::model::Color;
use crate::recorder::{OperationKind, OperationOutcome, OperationRecord, OperationRecorder};

fn side_name(left: bool) -> &'static str {
    if left {
        "left"
    } else {
        "right"
    }
}

impl RbTree {
    /// Insert `value`, recording every structural step
    ///
    /// A value already present cancels the operation: the record holds a
    /// single snapshot highlighting the existing node and the tree is untouched.
    pub fn insert(&mut self, value: i64) -> OperationRecord {
        let mut recorder = self.begin_operation(OperationKind::Insert, value);

        let outcome = if let Some(existing) = self.find(value) {
            recorder.record(
                &*self,
                format!("{value} is already in the tree; insertion cancelled"),
                &[existing],
            );
            OperationOutcome::Cancelled
        } else {
            self.insert_new(&mut recorder, value);
            OperationOutcome::Applied
        };

        tracing::debug!(
            component = module_path!(),
            op = "insert",
            value,
            outcome = outcome.as_str(),
            tree_len = self.len,
        );
        self.finish_operation(recorder, outcome)
    }

    fn insert_new(&mut self, recorder: &mut OperationRecorder, value: i64) {
        let id = self.allocate(value);

        let Some(root) = self.root else {
            self.root = Some(id);
            self.set_color(Some(id), Color::Black);
            recorder.record(
                &*self,
                format!("Tree was empty: {value} becomes the black root"),
                &[id],
            );
            return;
        };

        let mut parent = root;
        let mut attach_left;
        loop {
            debug_assert!(
                self.node(parent).is_some(),
                "descent reached released node {parent}"
            );
            let Some(node) = self.node(parent) else {
                return;
            };
            attach_left = value < node.value;
            let next = if attach_left { node.left } else { node.right };
            match next {
                Some(child) => parent = child,
                None => break,
            }
        }

        self.set_parent(Some(id), Some(parent));
        if attach_left {
            self.set_left(parent, Some(id));
        } else {
            self.set_right(parent, Some(id));
        }
        recorder.record(
            &*self,
            format!(
                "Attach red node {value} as the {} child of {}",
                side_name(attach_left),
                self.label(parent)
            ),
            &[id, parent],
        );

        self.insert_fixup(recorder, id);

        if let Some(root) = self.root {
            let description = if self.is_red(Some(root)) {
                format!("Recolor root {} black", self.label(root))
            } else {
                format!("Root {} is black; insertion complete", self.label(root))
            };
            self.set_color(Some(root), Color::Black);
            recorder.record(&*self, description, &[root]);
        }
    }

    /// Restore the red-black properties after attaching the red node `node`
    fn insert_fixup(&mut self, recorder: &mut OperationRecorder, mut node: NodeId) {
        while let Some(parent) = self.parent_of(node) {
            if self.is_black(Some(parent)) {
                break;
            }
            // A red parent is never the root at operation start, but the
            // uncle case can push red up to it.
            let Some(grandparent) = self.parent_of(parent) else {
                break;
            };

            let parent_is_left = self.left_of(grandparent) == Some(parent);
            let uncle = if parent_is_left {
                self.right_of(grandparent)
            } else {
                self.left_of(grandparent)
            };

            if let Some(uncle) = uncle.filter(|&u| self.is_red(Some(u))) {
                self.set_color(Some(parent), Color::Black);
                self.set_color(Some(uncle), Color::Black);
                self.set_color(Some(grandparent), Color::Red);
                recorder.record(
                    &*self,
                    format!(
                        "Parent {} and uncle {} are red: recolor them black and grandparent {} red",
                        self.label(parent),
                        self.label(uncle),
                        self.label(grandparent)
                    ),
                    &[parent, uncle, grandparent],
                );
                node = grandparent;
                continue;
            }

            let is_inner = if parent_is_left {
                self.right_of(parent) == Some(node)
            } else {
                self.left_of(parent) == Some(node)
            };

            // After straightening, the old parent is the lower node and
            // `node` sits in the parent role.
            let (lower, upper) = if is_inner {
                self.rotate_toward(parent, parent_is_left);
                recorder.record(
                    &*self,
                    format!(
                        "{} is an inner grandchild: rotate parent {} {}",
                        self.label(node),
                        self.label(parent),
                        side_name(parent_is_left)
                    ),
                    &[node, parent],
                );
                (parent, node)
            } else {
                (node, parent)
            };

            self.set_color(Some(upper), Color::Black);
            self.set_color(Some(grandparent), Color::Red);
            self.rotate_toward(grandparent, !parent_is_left);
            recorder.record(
                &*self,
                format!(
                    "Recolor {} black and grandparent {} red, then rotate {} {}",
                    self.label(upper),
                    self.label(grandparent),
                    self.label(grandparent),
                    side_name(!parent_is_left)
                ),
                &[upper, grandparent, lower],
            );
            node = lower;
        }
    }
}
