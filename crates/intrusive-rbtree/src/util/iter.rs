use std::iter::FusedIterator;

use crate::root::RbRoot;
use crate::types::RbNode;

use super::{first, first_postorder, last, next, next_postorder, prev};

/// In-order iterator over node indices.
///
/// Iterates from both ends; the two cursors stop once they meet.
pub struct Iter<'a, N> {
    arena: &'a [N],
    front: Option<u32>,
    back: Option<u32>,
}

impl<N: RbNode> Iterator for Iter<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let curr = self.front?;
        if self.back == Some(curr) {
            self.front = None;
            self.back = None;
        } else {
            self.front = next(self.arena, curr);
        }
        Some(curr)
    }
}

impl<N: RbNode> DoubleEndedIterator for Iter<'_, N> {
    fn next_back(&mut self) -> Option<u32> {
        let curr = self.back?;
        if self.front == Some(curr) {
            self.front = None;
            self.back = None;
        } else {
            self.back = prev(self.arena, curr);
        }
        Some(curr)
    }
}

impl<N: RbNode> FusedIterator for Iter<'_, N> {}

/// Ascending iterator over the tree's node indices.
pub fn iter<'a, N: RbNode>(arena: &'a [N], root: &RbRoot) -> Iter<'a, N> {
    Iter {
        arena,
        front: first(arena, root),
        back: last(arena, root),
    }
}

/// Descending iterator over the tree's node indices.
pub fn iter_rev<'a, N: RbNode>(arena: &'a [N], root: &RbRoot) -> std::iter::Rev<Iter<'a, N>> {
    iter(arena, root).rev()
}

/// Post-order iterator over node indices.
pub struct PostorderIter<'a, N> {
    arena: &'a [N],
    next: Option<u32>,
}

impl<N: RbNode> Iterator for PostorderIter<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let curr = self.next?;
        self.next = next_postorder(self.arena, curr);
        Some(curr)
    }
}

impl<N: RbNode> FusedIterator for PostorderIter<'_, N> {}

/// Post-order iterator over the tree's node indices, children first.
pub fn iter_postorder<'a, N: RbNode>(arena: &'a [N], root: &RbRoot) -> PostorderIter<'a, N> {
    PostorderIter {
        arena,
        next: first_postorder(arena, root),
    }
}
