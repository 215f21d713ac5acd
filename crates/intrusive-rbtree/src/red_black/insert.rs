use log::trace;

use crate::root::RbRoot;
use crate::types::{Color, RbNode};
use crate::util::{get_l, get_p, get_r, is_red, set_color, set_l, set_r};

use super::rotate::{rotate_left, rotate_right};

/// Where a new node is attached: the empty root, or an empty child slot of
/// an existing node. Found by the caller's own comparison-driven descent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Root,
    Left(u32),
    Right(u32),
}

impl Slot {
    pub fn parent(self) -> Option<u32> {
        match self {
            Slot::Root => None,
            Slot::Left(p) | Slot::Right(p) => Some(p),
        }
    }
}

/// Attaches `node` at `slot` as a red leaf. Does not rebalance; call
/// [`insert_fixup`] next.
///
/// The slot must be empty and `node` must not be linked into any tree.
/// Both are checked in debug builds only.
pub fn link_node<N: RbNode>(arena: &mut [N], root: &mut RbRoot, node: u32, slot: Slot) {
    debug_assert!(
        !arena[node as usize].is_linked(),
        "link_node: node {node} is already linked"
    );
    match slot {
        Slot::Root => {
            debug_assert!(root.node.is_none(), "link_node: root is occupied");
            root.node = Some(node);
        }
        Slot::Left(p) => {
            debug_assert!(get_l(arena, p).is_none(), "link_node: left of {p} is occupied");
            set_l(arena, p, Some(node));
        }
        Slot::Right(p) => {
            debug_assert!(get_r(arena, p).is_none(), "link_node: right of {p} is occupied");
            set_r(arena, p, Some(node));
        }
    }

    let link = arena[node as usize].rb_link_mut();
    link.parent = slot.parent();
    link.left = None;
    link.right = None;
    link.color = Color::Red;
    link.linked = true;
}

/// Restores the red-black invariants after [`link_node`].
///
/// At most two rotations; recoloring may climb to the root.
pub fn insert_fixup<N: RbNode>(arena: &mut [N], root: &mut RbRoot, node: u32) {
    let mut n = node;
    loop {
        let Some(mut p) = get_p(arena, n) else {
            set_color(arena, n, Color::Black);
            return;
        };
        if !is_red(arena, Some(p)) {
            return;
        }
        let g = get_p(arena, p).expect("red node always has a parent");

        if get_l(arena, g) == Some(p) {
            let u = get_r(arena, g);
            if is_red(arena, u) {
                trace!(target: "intrusive_rbtree", "insert_fixup: recolor at {g}");
                set_color(arena, p, Color::Black);
                set_color(arena, u.expect("red uncle exists"), Color::Black);
                set_color(arena, g, Color::Red);
                n = g;
                continue;
            }
            if get_r(arena, p) == Some(n) {
                trace!(target: "intrusive_rbtree", "insert_fixup: rotate_left at {p}");
                rotate_left(arena, root, p);
                n = p;
                p = get_p(arena, n).expect("rotated node has a parent");
            }
            trace!(target: "intrusive_rbtree", "insert_fixup: rotate_right at {g}");
            set_color(arena, p, Color::Black);
            set_color(arena, g, Color::Red);
            rotate_right(arena, root, g);
        } else {
            let u = get_l(arena, g);
            if is_red(arena, u) {
                trace!(target: "intrusive_rbtree", "insert_fixup: recolor at {g}");
                set_color(arena, p, Color::Black);
                set_color(arena, u.expect("red uncle exists"), Color::Black);
                set_color(arena, g, Color::Red);
                n = g;
                continue;
            }
            if get_l(arena, p) == Some(n) {
                trace!(target: "intrusive_rbtree", "insert_fixup: rotate_right at {p}");
                rotate_right(arena, root, p);
                n = p;
                p = get_p(arena, n).expect("rotated node has a parent");
            }
            trace!(target: "intrusive_rbtree", "insert_fixup: rotate_left at {g}");
            set_color(arena, p, Color::Black);
            set_color(arena, g, Color::Red);
            rotate_left(arena, root, g);
        }
        return;
    }
}
