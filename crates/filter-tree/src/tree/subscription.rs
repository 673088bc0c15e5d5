//! Structural change notifications
//!
//! Every mutation that changes a node's visible children produces a
//! [`ChildrenDelta`] describing the added and removed subsequences, so an
//! observer can reconcile an external display structure incrementally instead
//! of re-rendering from scratch.

use crate::tree::NodeId;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Callback invoked when a node's visible children change
///
/// Listeners receive only the delta, never the tree itself. Mutating the tree
/// from inside a listener is therefore impossible: all mutating operations
/// require `&mut FilterTree`, which is exclusively borrowed while deltas are
/// being delivered.
pub(crate) type Listener = Box<dyn FnMut(&ChildrenDelta)>;

/// The change in a node's visible children after one mutation
///
/// `added` and `removed` are each ordered subsequences of the node's child
/// list, so an observer holding the previous visible view can splice them in
/// and out without diffing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChildrenDelta {
    /// The node whose visible children changed
    pub node: NodeId,
    /// Children that became visible, in child-list order
    pub added: SmallVec<[NodeId; 8]>,
    /// Children that stopped being visible, in former view order
    pub removed: SmallVec<[NodeId; 8]>,
}

impl ChildrenDelta {
    /// True if the delta carries no change
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Compute the delta between two visible-children views
///
/// Both slices are subsequences of the same child list, so membership is
/// enough: an id present in `new` but not `old` was added, and vice versa.
pub(crate) fn diff_visible(node: NodeId, old: &[NodeId], new: &[NodeId]) -> ChildrenDelta {
    let added = new
        .iter()
        .copied()
        .filter(|id| !old.contains(id))
        .collect();
    let removed = old
        .iter()
        .copied()
        .filter(|id| !new.contains(id))
        .collect();
    ChildrenDelta {
        node,
        added,
        removed,
    }
}
