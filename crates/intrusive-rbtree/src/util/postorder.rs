//! Post-order traversal: both children are visited before their parent.
//!
//! Useful for tearing a tree down. The walk reads only the links of nodes
//! it has not yielded yet, so a caller may reuse or free each yielded record
//! as long as it does not rewrite the links of nodes still to come.

use crate::root::RbRoot;
use crate::types::RbNode;

use super::{get_l, get_p, get_r};

/// Deepest node reachable by preferring left children, then right ones.
fn left_deepest<N: RbNode>(arena: &[N], mut node: u32) -> u32 {
    loop {
        if let Some(l) = get_l(arena, node) {
            node = l;
        } else if let Some(r) = get_r(arena, node) {
            node = r;
        } else {
            return node;
        }
    }
}

/// First node in post-order.
pub fn first_postorder<N: RbNode>(arena: &[N], root: &RbRoot) -> Option<u32> {
    root.node.map(|r| left_deepest(arena, r))
}

/// Post-order successor of `node`.
pub fn next_postorder<N: RbNode>(arena: &[N], node: u32) -> Option<u32> {
    let p = get_p(arena, node)?;
    if get_l(arena, p) == Some(node) {
        if let Some(r) = get_r(arena, p) {
            return Some(left_deepest(arena, r));
        }
    }
    Some(p)
}
