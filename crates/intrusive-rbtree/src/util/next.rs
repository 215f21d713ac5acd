use crate::types::RbNode;

use super::first::{leftmost, rightmost};
use super::{get_l, get_p, get_r};

/// In-order successor of `node`.
///
/// Returns `None` at the end of the sequence, and for a node that is not
/// linked into any tree.
pub fn next<N: RbNode>(arena: &[N], node: u32) -> Option<u32> {
    if !arena[node as usize].is_linked() {
        return None;
    }
    if let Some(r) = get_r(arena, node) {
        return Some(leftmost(arena, r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor of `node`. Mirror image of [`next`].
pub fn prev<N: RbNode>(arena: &[N], node: u32) -> Option<u32> {
    if !arena[node as usize].is_linked() {
        return None;
    }
    if let Some(l) = get_l(arena, node) {
        return Some(rightmost(arena, l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}
