use std::cmp::Ordering;

use log::debug;

use crate::error::InvariantViolation;
use crate::root::{RbRoot, RbRootCached};
use crate::types::RbNode;
use crate::util::{first, iter};

/// Checks every structural invariant of the tree under `root`:
/// black root without a parent, no red node with a red child, uniform black
/// height, parent links that invert child links, and every reachable node
/// marked linked.
///
/// Returns the tree's black height (0 for an empty tree).
pub fn assert_red_black_tree<N: RbNode>(
    arena: &[N],
    root: &RbRoot,
) -> Result<usize, InvariantViolation> {
    check_shape(arena, root).inspect_err(|err| {
        debug!(target: "intrusive_rbtree", "red-black invariant violated: {err}");
    })
}

fn check_shape<N: RbNode>(arena: &[N], root: &RbRoot) -> Result<usize, InvariantViolation> {
    let Some(top) = root.node else {
        return Ok(0);
    };
    if arena[top as usize].p().is_some() {
        return Err(InvariantViolation::RootHasParent(top));
    }
    if !arena[top as usize].is_black() {
        return Err(InvariantViolation::RedRoot(top));
    }
    let mut seen = vec![false; arena.len()];
    black_height(arena, top, &mut seen)
}

fn black_height<N: RbNode>(
    arena: &[N],
    node: u32,
    seen: &mut [bool],
) -> Result<usize, InvariantViolation> {
    if std::mem::replace(&mut seen[node as usize], true) {
        return Err(InvariantViolation::Cycle { node });
    }
    let n = &arena[node as usize];
    if !n.is_linked() {
        return Err(InvariantViolation::NotLinked(node));
    }

    let mut heights = [0usize; 2];
    for (slot, child) in [n.l(), n.r()].into_iter().enumerate() {
        let Some(c) = child else {
            continue;
        };
        let recorded = arena[c as usize].p();
        if recorded != Some(node) {
            return Err(InvariantViolation::BrokenParentLink {
                parent: node,
                child: c,
                recorded,
            });
        }
        if !n.is_black() && !arena[c as usize].is_black() {
            return Err(InvariantViolation::RedChildOfRed {
                parent: node,
                child: c,
            });
        }
        heights[slot] = black_height(arena, c, seen)?;
    }

    let [left, right] = heights;
    if left != right {
        return Err(InvariantViolation::BlackHeightMismatch { node, left, right });
    }
    Ok(left + usize::from(n.is_black()))
}

/// [`assert_red_black_tree`] plus in-order key order under the caller's
/// comparison. Equal neighbours are accepted.
pub fn assert_ordered<N, C>(
    arena: &[N],
    root: &RbRoot,
    comparator: C,
) -> Result<usize, InvariantViolation>
where
    N: RbNode,
    C: Fn(&N, &N) -> Ordering,
{
    let bh = assert_red_black_tree(arena, root)?;
    let mut prev: Option<u32> = None;
    for i in iter(arena, root) {
        if let Some(prev) = prev {
            let ordering = comparator(&arena[prev as usize], &arena[i as usize]);
            if ordering == Ordering::Greater {
                let err = InvariantViolation::OutOfOrder {
                    prev,
                    next: i,
                    ordering,
                };
                debug!(target: "intrusive_rbtree", "red-black invariant violated: {err}");
                return Err(err);
            }
        }
        prev = Some(i);
    }
    Ok(bh)
}

/// [`assert_red_black_tree`] plus agreement of the leftmost cache.
pub fn assert_cached<N: RbNode>(
    arena: &[N],
    root: &RbRootCached,
) -> Result<usize, InvariantViolation> {
    let bh = assert_red_black_tree(arena, &root.root)?;
    let expected = first(arena, &root.root);
    if expected != root.leftmost {
        let err = InvariantViolation::StaleLeftmost {
            expected,
            cached: root.leftmost,
        };
        debug!(target: "intrusive_rbtree", "red-black invariant violated: {err}");
        return Err(err);
    }
    Ok(bh)
}
