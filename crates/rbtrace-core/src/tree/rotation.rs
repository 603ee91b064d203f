use rbtrace_core_types::NodeId;

use super::RbTree;

impl RbTree {
    /// Rotate left around `pivot`; its right child takes its place
    ///
    /// In-order sequence is preserved. Rotations never record snapshots;
    /// the fixup procedures record around them.
    pub(super) fn rotate_left(&mut self, pivot: NodeId) {
        debug_assert!(
            self.right_of(pivot).is_some(),
            "rotate_left on {pivot} without a right child"
        );
        let Some(heir) = self.right_of(pivot) else {
            return;
        };

        let inner = self.left_of(heir);
        self.set_right(pivot, inner);
        self.set_parent(inner, Some(pivot));

        let parent = self.parent_of(pivot);
        self.set_parent(Some(heir), parent);
        self.replace_child(parent, pivot, Some(heir));

        self.set_left(heir, Some(pivot));
        self.set_parent(Some(pivot), Some(heir));
    }

    /// Rotate right around `pivot`; its left child takes its place
    pub(super) fn rotate_right(&mut self, pivot: NodeId) {
        debug_assert!(
            self.left_of(pivot).is_some(),
            "rotate_right on {pivot} without a left child"
        );
        let Some(heir) = self.left_of(pivot) else {
            return;
        };

        let inner = self.right_of(heir);
        self.set_left(pivot, inner);
        self.set_parent(inner, Some(pivot));

        let parent = self.parent_of(pivot);
        self.set_parent(Some(heir), parent);
        self.replace_child(parent, pivot, Some(heir));

        self.set_right(heir, Some(pivot));
        self.set_parent(Some(pivot), Some(heir));
    }

    /// Left rotation when `toward_left` is set (the pivot moves down to the
    /// left), right rotation otherwise
    pub(super) fn rotate_toward(&mut self, pivot: NodeId, toward_left: bool) {
        if toward_left {
            self.rotate_left(pivot);
        } else {
            self.rotate_right(pivot);
        }
    }
}
