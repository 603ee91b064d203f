use rbtrace_core_types::NodeId;

use super::RbTree;
use crate::model::Color;
use crate::recorder::{OperationKind, OperationOutcome, OperationRecord, OperationRecorder};

/// Where the deficit left by a removal sits: the color that vacated the
/// position, the node now occupying it (possibly none) and that position's parent
struct Vacancy {
    color: Color,
    focus: Option<NodeId>,
    parent: Option<NodeId>,
}

fn present(ids: &[Option<NodeId>]) -> Vec<NodeId> {
    ids.iter().flatten().copied().collect()
}

fn side_name(left: bool) -> &'static str {
    if left {
        "left"
    } else {
        "right"
    }
}

impl RbTree {
    /// Delete `value`, recording every structural step
    ///
    /// A missing value cancels the operation with one informational snapshot.
    pub fn delete(&mut self, value: i64) -> OperationRecord {
        let mut recorder = self.begin_operation(OperationKind::Delete, value);

        let outcome = match self.find(value) {
            Some(target) => {
                self.delete_node(&mut recorder, target);
                OperationOutcome::Applied
            }
            None => {
                recorder.record(
                    &*self,
                    format!("{value} is not in the tree; deletion cancelled"),
                    &[],
                );
                OperationOutcome::Cancelled
            }
        };

        tracing::debug!(
            component = module_path!(),
            op = "delete",
            value,
            outcome = outcome.as_str(),
            tree_len = self.len,
        );
        self.finish_operation(recorder, outcome)
    }

    fn delete_node(&mut self, recorder: &mut OperationRecorder, target: NodeId) {
        let target_label = self.label(target);
        recorder.record(
            &*self,
            format!("Select {target_label} for deletion"),
            &[target],
        );

        let left = self.left_of(target);
        let right = self.right_of(target);

        let vacancy = if left.is_some() && right.is_some() {
            self.replace_with_successor(recorder, target)
        } else {
            let child = left.or(right);
            let parent = self.parent_of(target);
            let color = self.color_of(Some(target));

            self.transplant(target, child);
            self.release(target);

            let description = match child {
                Some(child) => format!(
                    "Remove {target_label}; its child {} moves up into its place",
                    self.label(child)
                ),
                None => format!("Remove leaf {target_label}"),
            };
            recorder.record(&*self, description, &present(&[child, parent]));

            Vacancy {
                color,
                focus: child,
                parent,
            }
        };

        if vacancy.color == Color::Black {
            self.delete_fixup(recorder, vacancy.focus, vacancy.parent);
        }

        match self.root {
            None => {
                recorder.record(&*self, "The tree is now empty", &[]);
            }
            Some(root) => {
                let description = if self.is_red(Some(root)) {
                    format!("Recolor root {} black", self.label(root))
                } else {
                    format!("Root {} is black; deletion complete", self.label(root))
                };
                self.set_color(Some(root), Color::Black);
                recorder.record(&*self, description, &[root]);
            }
        }
    }

    /// Replace a two-children `target` with its in-order successor
    ///
    /// The successor keeps its identity and inherits the target's position
    /// and color; the target is released.
    fn replace_with_successor(
        &mut self,
        recorder: &mut OperationRecorder,
        target: NodeId,
    ) -> Vacancy {
        let target_label = self.label(target);
        debug_assert!(
            self.right_of(target).is_some(),
            "successor replacement on {target} without a right child"
        );
        let Some(right) = self.right_of(target) else {
            return Vacancy {
                color: self.color_of(Some(target)),
                focus: None,
                parent: self.parent_of(target),
            };
        };
        let successor = self.minimum(right);
        let successor_label = self.label(successor);
        recorder.record(
            &*self,
            format!(
                "{target_label} has two children: its in-order successor {successor_label} will replace it"
            ),
            &[target, successor],
        );

        let color = self.color_of(Some(successor));
        let focus = self.right_of(successor);
        let parent = if self.parent_of(successor) == Some(target) {
            Some(successor)
        } else {
            let successor_parent = self.parent_of(successor);
            self.transplant(successor, focus);
            self.set_parent(Some(successor), None);
            self.set_right(successor, None);

            let description = match focus {
                Some(child) => format!(
                    "Detach {successor_label}; its right child {} moves up",
                    self.label(child)
                ),
                None => format!("Detach {successor_label} from its parent"),
            };
            recorder.record(
                &*self,
                description,
                &present(&[Some(successor), focus, successor_parent]),
            );

            let target_right = self.right_of(target);
            self.set_right(successor, target_right);
            self.set_parent(target_right, Some(successor));
            successor_parent
        };

        self.transplant(target, Some(successor));
        let target_left = self.left_of(target);
        self.set_left(successor, target_left);
        self.set_parent(target_left, Some(successor));
        self.set_color(Some(successor), self.color_of(Some(target)));
        self.release(target);

        recorder.record(
            &*self,
            format!("{successor_label} takes the place and color of {target_label}"),
            &[successor],
        );

        Vacancy {
            color,
            focus,
            parent,
        }
    }

    /// Restore the black-height after a black node left the position now
    /// held by `focus` (absent positions are tracked through `parent`)
    fn delete_fixup(
        &mut self,
        recorder: &mut OperationRecorder,
        mut focus: Option<NodeId>,
        mut parent: Option<NodeId>,
    ) {
        while focus != self.root && self.is_black(focus) {
            if let Some(f) = focus {
                parent = self.parent_of(f);
            }
            let Some(p) = parent else {
                break;
            };

            let focus_is_left = self.left_of(p) == focus;
            let sibling = if focus_is_left {
                self.right_of(p)
            } else {
                self.left_of(p)
            };
            let Some(mut sibling) = sibling else {
                focus = Some(p);
                continue;
            };

            if self.is_red(Some(sibling)) {
                self.set_color(Some(sibling), Color::Black);
                self.set_color(Some(p), Color::Red);
                recorder.record(
                    &*self,
                    format!(
                        "Sibling {} is red: recolor it black and parent {} red",
                        self.label(sibling),
                        self.label(p)
                    ),
                    &[sibling, p],
                );
                self.rotate_toward(p, focus_is_left);
                recorder.record(
                    &*self,
                    format!("Rotate {} {}", self.label(p), side_name(focus_is_left)),
                    &present(&[Some(p), Some(sibling), focus]),
                );
                continue;
            }

            let (near, far) = self.nephews(sibling, focus_is_left);
            if self.is_black(near) && self.is_black(far) {
                self.set_color(Some(sibling), Color::Red);
                recorder.record(
                    &*self,
                    format!(
                        "Sibling {} has no red child: recolor it red and move the deficit up to {}",
                        self.label(sibling),
                        self.label(p)
                    ),
                    &[sibling, p],
                );
                focus = Some(p);
                continue;
            }

            if self.is_black(far) {
                self.set_color(near, Color::Black);
                self.set_color(Some(sibling), Color::Red);
                self.rotate_toward(sibling, !focus_is_left);
                recorder.record(
                    &*self,
                    format!(
                        "Far nephew of {} is black: recolor the near nephew black and {} red, then rotate {} {}",
                        self.label(p),
                        self.label(sibling),
                        self.label(sibling),
                        side_name(!focus_is_left)
                    ),
                    &present(&[Some(sibling), near]),
                );
                let refetched = if focus_is_left {
                    self.right_of(p)
                } else {
                    self.left_of(p)
                };
                debug_assert!(
                    refetched.is_some(),
                    "rotation around {sibling} left {p} without a sibling"
                );
                let Some(refetched) = refetched else {
                    break;
                };
                sibling = refetched;
            }

            let (_, far) = self.nephews(sibling, focus_is_left);
            self.set_color(Some(sibling), self.color_of(Some(p)));
            self.set_color(Some(p), Color::Black);
            self.set_color(far, Color::Black);
            self.rotate_toward(p, focus_is_left);
            recorder.record(
                &*self,
                format!(
                    "{} takes the color of {}, which turns black with the far nephew, then rotate {} {}",
                    self.label(sibling),
                    self.label(p),
                    self.label(p),
                    side_name(focus_is_left)
                ),
                &present(&[Some(sibling), Some(p), far]),
            );
            focus = self.root;
        }

        if let Some(f) = focus.filter(|&f| Some(f) != self.root) {
            if self.is_red(Some(f)) {
                self.set_color(Some(f), Color::Black);
                recorder.record(
                    &*self,
                    format!("Recolor {} black to restore the black-height", self.label(f)),
                    &[f],
                );
            }
        }
    }

    /// Children of `sibling` as (near, far) relative to the focus side
    fn nephews(&self, sibling: NodeId, focus_is_left: bool) -> (Option<NodeId>, Option<NodeId>) {
        if focus_is_left {
            (self.left_of(sibling), self.right_of(sibling))
        } else {
            (self.right_of(sibling), self.left_of(sibling))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Color;
    use crate::recorder::{OperationKind, OperationOutcome};
    use crate::tree::RbTree;

    fn tree_with(values: &[i64]) -> RbTree {
        let mut tree = RbTree::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    #[test]
    fn test_delete_missing_is_cancelled() {
        let mut tree = tree_with(&[1, 2, 3]);
        let record = tree.delete(9);

        assert_eq!(record.outcome, OperationOutcome::Cancelled);
        assert_eq!(record.snapshots.len(), 1);
        assert!(record.snapshots[0].highlight.is_empty());
        assert_eq!(tree.in_order_values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_red_leaf_needs_no_fixup() {
        let mut tree = tree_with(&[10, 5, 15]);
        let record = tree.delete(5);

        // select, remove, closing root snapshot
        assert_eq!(record.snapshots.len(), 3);
        assert_eq!(tree.in_order_values(), vec![10, 15]);
    }

    #[test]
    fn test_delete_with_detached_successor() {
        let mut tree = tree_with(&[20, 10, 40, 30, 50, 35]);
        let record = tree.delete(20);

        assert!(record
            .snapshots
            .iter()
            .any(|s| s.description.starts_with("Detach")));
        assert_eq!(tree.in_order_values(), vec![10, 30, 35, 40, 50]);
        assert_eq!(tree.color_of(tree.root()), Color::Black);
    }

    #[test]
    fn test_delete_black_leaf_runs_fixup() {
        let mut tree = tree_with(&[10, 5, 15, 20]);
        // 5 is a black leaf whose sibling 15 has a red child
        let record = tree.delete(5);

        assert!(record
            .snapshots
            .iter()
            .any(|s| s.description.contains("Rotate") || s.description.contains("rotate")));
        assert_eq!(tree.in_order_values(), vec![10, 15, 20]);
        assert_eq!(tree.node(tree.root().unwrap()).unwrap().value, 15);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "without a right child")]
    fn test_successor_replacement_requires_right_child() {
        let mut tree = tree_with(&[10, 5]);
        let root = tree.root().unwrap();
        let mut recorder = tree.begin_operation(OperationKind::Delete, 10);

        tree.replace_with_successor(&mut recorder, root);
    }

    #[test]
    fn test_delete_everything() {
        let mut tree = tree_with(&[4, 2, 6, 1, 3, 5, 7]);
        for v in [4, 1, 7, 2, 6, 3, 5] {
            tree.delete(v);
        }
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }
}
