//! Filterable Tree Library
//!
//! A tree structure whose nodes can be added at runtime and filtered live by
//! a predicate, with structural change notifications for incremental display
//! updates.
//!
//! # Core Concepts
//!
//! - **FilterTree**: arena-backed tree addressed by [`NodeId`]
//! - **Predicate**: a function from a value to a boolean, deciding leaf
//!   visibility; branches are pruned only when their own subtree filters to
//!   nothing at their level, never by their own value
//! - **ChildrenDelta**: added/removed subsequences emitted to subscribers
//!   whenever a node's visible children change
//!
//! # Example
//!
//! ```
//! use filter_tree::prelude::*;
//!
//! let mut tree = FilterTree::new("inventory".to_string());
//! let fruit = tree.add_child(tree.root(), "fruit".to_string()).unwrap();
//! tree.add_child(fruit, "apple".to_string()).unwrap();
//! tree.add_child(fruit, "banana".to_string()).unwrap();
//!
//! // Filter live: only leaves containing "an" survive, branches stay
//! tree.set_predicate(tree.root(), Some(predicate(|v: &String| v.contains("an"))))
//!     .unwrap();
//! assert_eq!(tree.visible_children(fruit).len(), 1);
//!
//! // Clearing the filter restores the full view
//! tree.set_predicate(tree.root(), None).unwrap();
//! assert_eq!(tree.visible_children(fruit).len(), 2);
//! ```

pub mod error;
pub mod tree;

pub use error::TreeError;
pub use tree::{
    predicate, predicate_eq, try_predicate, ChildrenDelta, Descendants, FilterTree, NodeId,
    Predicate, SubscriptionId,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TreeError;
    pub use crate::tree::prelude::*;
}
