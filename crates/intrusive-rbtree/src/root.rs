//! Tree handles.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Handle to one tree: the index of its top node, `None` when empty.
///
/// A root identifies a tree instance. Several roots may share one arena as
/// long as they govern disjoint sets of nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RbRoot {
    pub(crate) node: Option<u32>,
}

impl RbRoot {
    pub const fn new() -> Self {
        Self { node: None }
    }

    /// Index of the top node.
    pub fn node(&self) -> Option<u32> {
        self.node
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }
}

/// Root that also tracks the leftmost node, making `first` O(1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RbRootCached {
    pub(crate) root: RbRoot,
    pub(crate) leftmost: Option<u32>,
}

impl RbRootCached {
    pub const fn new() -> Self {
        Self {
            root: RbRoot::new(),
            leftmost: None,
        }
    }

    /// The plain root, for shape queries and for `link_node`.
    pub fn root(&self) -> &RbRoot {
        &self.root
    }

    /// Mutable access to the plain root, used when linking a new node.
    ///
    /// Mutating the tree through this handle with the uncached operations
    /// leaves the leftmost cache stale.
    pub fn root_mut(&mut self) -> &mut RbRoot {
        &mut self.root
    }

    pub fn leftmost(&self) -> Option<u32> {
        self.leftmost
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
