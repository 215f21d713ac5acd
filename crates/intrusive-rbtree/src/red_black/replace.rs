use crate::root::RbRoot;
use crate::types::RbNode;
use crate::util::{change_child, set_p};

/// Puts `new` at `old`'s exact position: same parent, children and color.
///
/// No rebalancing and no key check. `new` must sort exactly where `old`
/// did under the caller's ordering, otherwise the tree is silently left
/// out of order. `old` ends up unlinked.
pub fn replace_node<N: RbNode>(arena: &mut [N], root: &mut RbRoot, old: u32, new: u32) {
    debug_assert!(
        arena[old as usize].is_linked(),
        "replace_node: node {old} is not linked"
    );
    debug_assert!(
        !arena[new as usize].is_linked(),
        "replace_node: node {new} is already linked"
    );
    let link = *arena[old as usize].rb_link();

    if let Some(l) = link.left {
        set_p(arena, l, Some(new));
    }
    if let Some(r) = link.right {
        set_p(arena, r, Some(new));
    }
    change_child(arena, root, link.parent, old, Some(new));

    *arena[new as usize].rb_link_mut() = link;
    arena[old as usize].rb_link_mut().clear();
}
