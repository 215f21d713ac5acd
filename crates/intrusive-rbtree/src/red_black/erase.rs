use log::trace;

use crate::root::RbRoot;
use crate::types::{Color, RbNode};
use crate::util::first::leftmost;
use crate::util::{
    change_child, color, get_l, get_p, get_r, is_black, is_red, set_color, set_l, set_p, set_r,
};

use super::rotate::{rotate_left, rotate_right};

/// Removes `node` from the tree and restores the invariants.
///
/// A node with two children is replaced in place by its in-order successor;
/// only linkage moves, records stay where they are in the arena. `node` is
/// left unlinked and may be freed or reused by the caller.
pub fn erase<N: RbNode>(arena: &mut [N], root: &mut RbRoot, node: u32) {
    debug_assert!(
        arena[node as usize].is_linked(),
        "erase: node {node} is not linked"
    );
    let parent = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);

    // `x` takes the removed position; `xp` is its parent, tracked separately
    // because `x` may be null.
    let (x, xp, removed) = match (l, r) {
        (Some(l), Some(r)) => {
            let s = leftmost(arena, r);
            let removed = color(arena, s);
            let sr = get_r(arena, s);
            let xp = if s == r {
                s
            } else {
                let sp = get_p(arena, s).expect("successor below right child has a parent");
                set_l(arena, sp, sr);
                if let Some(sr) = sr {
                    set_p(arena, sr, Some(sp));
                }
                set_r(arena, s, Some(r));
                set_p(arena, r, Some(s));
                sp
            };
            set_l(arena, s, Some(l));
            set_p(arena, l, Some(s));
            set_p(arena, s, parent);
            let c = color(arena, node);
            set_color(arena, s, c);
            change_child(arena, root, parent, node, Some(s));
            (sr, Some(xp), removed)
        }
        _ => {
            let child = l.or(r);
            if let Some(c) = child {
                set_p(arena, c, parent);
            }
            change_child(arena, root, parent, node, child);
            (child, parent, color(arena, node))
        }
    };

    arena[node as usize].rb_link_mut().clear();

    if removed.is_black() {
        erase_fixup(arena, root, x, xp);
    }
}

/// Pushes the missing black from `x` (possibly null) up the tree until it is
/// absorbed. `parent` is `x`'s parent.
fn erase_fixup<N: RbNode>(
    arena: &mut [N],
    root: &mut RbRoot,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) {
    loop {
        if is_red(arena, x) {
            set_color(arena, x.expect("red node exists"), Color::Black);
            return;
        }
        let Some(p) = parent else {
            return;
        };

        if get_l(arena, p) == x {
            let mut s = get_r(arena, p).expect("doubly black node has a sibling");
            if is_red(arena, Some(s)) {
                trace!(target: "intrusive_rbtree", "erase_fixup: red sibling {s}");
                set_color(arena, s, Color::Black);
                set_color(arena, p, Color::Red);
                rotate_left(arena, root, p);
                s = get_r(arena, p).expect("doubly black node has a sibling");
            }
            let sl = get_l(arena, s);
            let sr = get_r(arena, s);
            if is_black(arena, sl) && is_black(arena, sr) {
                trace!(target: "intrusive_rbtree", "erase_fixup: recolor sibling {s}");
                set_color(arena, s, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            }
            if is_black(arena, sr) {
                trace!(target: "intrusive_rbtree", "erase_fixup: rotate_right at {s}");
                set_color(arena, sl.expect("red near nephew exists"), Color::Black);
                set_color(arena, s, Color::Red);
                rotate_right(arena, root, s);
                s = get_r(arena, p).expect("doubly black node has a sibling");
            }
            trace!(target: "intrusive_rbtree", "erase_fixup: rotate_left at {p}");
            let c = color(arena, p);
            set_color(arena, s, c);
            set_color(arena, p, Color::Black);
            let far = get_r(arena, s).expect("red far nephew exists");
            set_color(arena, far, Color::Black);
            rotate_left(arena, root, p);
        } else {
            let mut s = get_l(arena, p).expect("doubly black node has a sibling");
            if is_red(arena, Some(s)) {
                trace!(target: "intrusive_rbtree", "erase_fixup: red sibling {s}");
                set_color(arena, s, Color::Black);
                set_color(arena, p, Color::Red);
                rotate_right(arena, root, p);
                s = get_l(arena, p).expect("doubly black node has a sibling");
            }
            let sl = get_l(arena, s);
            let sr = get_r(arena, s);
            if is_black(arena, sl) && is_black(arena, sr) {
                trace!(target: "intrusive_rbtree", "erase_fixup: recolor sibling {s}");
                set_color(arena, s, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            }
            if is_black(arena, sl) {
                trace!(target: "intrusive_rbtree", "erase_fixup: rotate_left at {s}");
                set_color(arena, sr.expect("red near nephew exists"), Color::Black);
                set_color(arena, s, Color::Red);
                rotate_left(arena, root, s);
                s = get_l(arena, p).expect("doubly black node has a sibling");
            }
            trace!(target: "intrusive_rbtree", "erase_fixup: rotate_right at {p}");
            let c = color(arena, p);
            set_color(arena, s, c);
            set_color(arena, p, Color::Black);
            let far = get_l(arena, s).expect("red far nephew exists");
            set_color(arena, far, Color::Black);
            rotate_right(arena, root, p);
        }
        return;
    }
}
