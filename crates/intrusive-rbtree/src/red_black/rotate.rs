use log::trace;

use crate::root::RbRoot;
use crate::types::RbNode;
use crate::util::{change_child, get_l, get_p, get_r, set_l, set_p, set_r};

/// Log target of the per-rotation trace events.
pub const ROTATE_TARGET: &str = "intrusive_rbtree::rotate";

/// Promotes `pivot`'s right child above it.
///
/// ```text
///     P                R
///    / \              / \
///   a   R     =>     P   c
///      / \          / \
///     b   c        a   b
/// ```
///
/// In-order sequence is unchanged. Colors are untouched.
///
/// # Panics
///
/// If `pivot` has no right child.
pub fn rotate_left<N: RbNode>(arena: &mut [N], root: &mut RbRoot, pivot: u32) {
    let Some(r) = get_r(arena, pivot) else {
        panic!("rotate_left: node {pivot} has no right child");
    };
    trace!(target: ROTATE_TARGET, "rotate_left at {pivot}");
    let p = get_p(arena, pivot);
    let rl = get_l(arena, r);

    set_r(arena, pivot, rl);
    if let Some(rl) = rl {
        set_p(arena, rl, Some(pivot));
    }

    set_l(arena, r, Some(pivot));
    set_p(arena, pivot, Some(r));

    set_p(arena, r, p);
    change_child(arena, root, p, pivot, Some(r));
}

/// Promotes `pivot`'s left child above it. Mirror image of [`rotate_left`].
///
/// # Panics
///
/// If `pivot` has no left child.
pub fn rotate_right<N: RbNode>(arena: &mut [N], root: &mut RbRoot, pivot: u32) {
    let Some(l) = get_l(arena, pivot) else {
        panic!("rotate_right: node {pivot} has no left child");
    };
    trace!(target: ROTATE_TARGET, "rotate_right at {pivot}");
    let p = get_p(arena, pivot);
    let lr = get_r(arena, l);

    set_l(arena, pivot, lr);
    if let Some(lr) = lr {
        set_p(arena, lr, Some(pivot));
    }

    set_r(arena, l, Some(pivot));
    set_p(arena, pivot, Some(l));

    set_p(arena, l, p);
    change_child(arena, root, p, pivot, Some(l));
}
