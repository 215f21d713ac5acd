//! Key-agnostic shape helpers.
//!
//! Everything here walks `p` / `l` / `r` links only and never looks at the
//! caller's records, so it works for any `N: RbNode`:
//! - [`first()`] / [`last()`]: extreme nodes of a tree
//! - [`next()`] / [`prev()`]: in-order successor / predecessor
//! - [`first_postorder`] / [`next_postorder`]: children-before-parent walk
//! - [`iter()`], [`iter_rev`], [`iter_postorder`]: borrowing iterators

pub mod first;
pub mod iter;
pub mod next;
pub mod postorder;

use crate::root::RbRoot;
use crate::types::{Color, RbNode};

pub use first::{first, last};
pub use iter::{iter, iter_postorder, iter_rev, Iter, PostorderIter};
pub use next::{next, prev};
pub use postorder::{first_postorder, next_postorder};

#[inline]
pub(crate) fn get_p<N: RbNode>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: RbNode>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: RbNode>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: RbNode>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: RbNode>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: RbNode>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

#[inline]
pub(crate) fn color<N: RbNode>(arena: &[N], idx: u32) -> Color {
    arena[idx as usize].color()
}

#[inline]
pub(crate) fn set_color<N: RbNode>(arena: &mut [N], idx: u32, c: Color) {
    arena[idx as usize].set_color(c);
}

/// Null children count as black.
#[inline]
pub(crate) fn is_black<N: RbNode>(arena: &[N], idx: Option<u32>) -> bool {
    idx.map_or(true, |i| arena[i as usize].is_black())
}

#[inline]
pub(crate) fn is_red<N: RbNode>(arena: &[N], idx: Option<u32>) -> bool {
    !is_black(arena, idx)
}

/// Points whatever referenced `old` from above (its parent, or the root)
/// at `new`. `new`'s own parent field is left to the caller.
pub(crate) fn change_child<N: RbNode>(
    arena: &mut [N],
    root: &mut RbRoot,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match parent {
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
        }
        None => root.node = new,
    }
}

fn size_inner<N: RbNode>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes in the tree.
pub fn size<N: RbNode>(arena: &[N], root: &RbRoot) -> usize {
    root.node.map_or(0, |r| size_inner(arena, r))
}

fn height_inner<N: RbNode>(arena: &[N], node: Option<u32>) -> usize {
    node.map_or(0, |n| {
        1 + height_inner(arena, get_l(arena, n)).max(height_inner(arena, get_r(arena, n)))
    })
}

/// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
pub fn height<N: RbNode>(arena: &[N], root: &RbRoot) -> usize {
    height_inner(arena, root.node)
}
