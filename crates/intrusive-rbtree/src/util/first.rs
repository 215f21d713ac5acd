use crate::root::RbRoot;
use crate::types::RbNode;

use super::{get_l, get_r};

/// Leftmost descendant of `node` (inclusive).
#[inline]
pub(crate) fn leftmost<N: RbNode>(arena: &[N], mut node: u32) -> u32 {
    while let Some(l) = get_l(arena, node) {
        node = l;
    }
    node
}

/// Rightmost descendant of `node` (inclusive).
#[inline]
pub(crate) fn rightmost<N: RbNode>(arena: &[N], mut node: u32) -> u32 {
    while let Some(r) = get_r(arena, node) {
        node = r;
    }
    node
}

/// Smallest node in the tree, `None` when empty.
pub fn first<N: RbNode>(arena: &[N], root: &RbRoot) -> Option<u32> {
    root.node.map(|r| leftmost(arena, r))
}

/// Largest node in the tree, `None` when empty.
pub fn last<N: RbNode>(arena: &[N], root: &RbRoot) -> Option<u32> {
    root.node.map(|r| rightmost(arena, r))
}
