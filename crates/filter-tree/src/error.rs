//! Error types for tree operations

use crate::tree::NodeId;
use derive_more::Display;

/// Errors reported by [`FilterTree`](crate::tree::FilterTree) operations
///
/// All failures are surfaced synchronously to the immediate caller; nothing
/// is retried and no operation corrupts the tree structure on failure.
#[derive(Debug, Display)]
pub enum TreeError {
    /// The referenced node does not exist (never created, or already freed)
    #[display(fmt = "{} does not exist", _0)]
    NodeNotFound(NodeId),

    /// The node already has a parent; a node participates in at most one
    /// child list at a time
    #[display(fmt = "{} is already attached to {}", child, parent)]
    AlreadyAttached {
        /// The node that was being attached
        child: NodeId,
        /// Its current parent
        parent: NodeId,
    },

    /// Attaching the node would make it its own ancestor
    #[display(fmt = "attaching {} under {} would create a cycle", child, parent)]
    WouldCycle {
        /// The prospective parent
        parent: NodeId,
        /// The node that was being attached
        child: NodeId,
    },

    /// The node is not a child of the given parent
    #[display(fmt = "{} is not a child of {}", child, parent)]
    NotAChild {
        /// The parent whose child list was searched
        parent: NodeId,
        /// The node that was not found in it
        child: NodeId,
    },

    /// A filter predicate failed while judging a node's value
    #[display(fmt = "predicate failed for {}: {}", node, source)]
    Predicate {
        /// The node whose value was being judged
        node: NodeId,
        /// The underlying evaluation error
        source: anyhow::Error,
    },
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeError::Predicate { source, .. } => {
                let source: &(dyn std::error::Error + 'static) = source.as_ref();
                Some(source)
            }
            _ => None,
        }
    }
}
