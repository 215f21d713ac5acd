//! Operations on [`RbRootCached`], which keeps the leftmost node at hand.
//!
//! Linking still goes through [`link_node`](super::link_node) with
//! [`RbRootCached::root_mut`]; the caller's descent knows whether the new
//! node went left at every step and passes that as `leftmost`.

use crate::root::RbRootCached;
use crate::types::RbNode;
use crate::util::next;

use super::erase::erase;
use super::insert::insert_fixup;
use super::replace::replace_node;

/// [`insert_fixup`] that also records `node` as the new leftmost when the
/// caller's descent only ever went left.
pub fn insert_fixup_cached<N: RbNode>(
    arena: &mut [N],
    root: &mut RbRootCached,
    node: u32,
    leftmost: bool,
) {
    if leftmost {
        root.leftmost = Some(node);
    }
    insert_fixup(arena, &mut root.root, node);
}

/// [`erase`] that advances the leftmost cache when it is the erased node.
pub fn erase_cached<N: RbNode>(arena: &mut [N], root: &mut RbRootCached, node: u32) {
    if root.leftmost == Some(node) {
        root.leftmost = next(arena, node);
    }
    erase(arena, &mut root.root, node);
}

/// [`replace_node`] that retargets the leftmost cache.
pub fn replace_node_cached<N: RbNode>(
    arena: &mut [N],
    root: &mut RbRootCached,
    old: u32,
    new: u32,
) {
    if root.leftmost == Some(old) {
        root.leftmost = Some(new);
    }
    replace_node(arena, &mut root.root, old, new);
}

/// Smallest node, in O(1).
pub fn first_cached(root: &RbRootCached) -> Option<u32> {
    root.leftmost
}
