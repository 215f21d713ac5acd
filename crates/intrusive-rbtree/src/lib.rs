//! Intrusive red-black tree over a caller-owned arena.
//!
//! Records embed an [`RbLink`] and implement [`RbNode`] (usually through
//! [`impl_rb_node!`]). The tree never allocates, never frees and never
//! compares: all "pointers" are `u32` indices into the caller's `[N]`, the
//! ordering lives in the caller's search loop, and locking is the caller's
//! business (`&mut` on the arena already makes mutation exclusive).
//!
//! A typical insert descends with the caller's comparison to an empty
//! [`Slot`], then calls [`link_node`] and [`insert_fixup`]:
//!
//! ```
//! use intrusive_rbtree::{assert_red_black_tree, impl_rb_node, insert_fixup, iter, link_node,
//!     RbLink, RbRoot, Slot};
//!
//! struct Entry {
//!     key: u32,
//!     link: RbLink,
//! }
//! impl_rb_node!(Entry, link);
//!
//! fn insert(arena: &mut [Entry], root: &mut RbRoot, idx: u32) {
//!     let mut slot = Slot::Root;
//!     let mut curr = root.node();
//!     while let Some(c) = curr {
//!         if arena[idx as usize].key < arena[c as usize].key {
//!             slot = Slot::Left(c);
//!             curr = arena[c as usize].link.left();
//!         } else {
//!             slot = Slot::Right(c);
//!             curr = arena[c as usize].link.right();
//!         }
//!     }
//!     link_node(arena, root, idx, slot);
//!     insert_fixup(arena, root, idx);
//! }
//!
//! let mut arena: Vec<Entry> = [30, 10, 20]
//!     .into_iter()
//!     .map(|key| Entry { key, link: RbLink::new() })
//!     .collect();
//! let mut root = RbRoot::new();
//! for i in 0..3 {
//!     insert(&mut arena, &mut root, i);
//! }
//! assert_red_black_tree(&arena, &root).unwrap();
//! let keys: Vec<u32> = iter(&arena, &root).map(|i| arena[i as usize].key).collect();
//! assert_eq!(keys, vec![10, 20, 30]);
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Color`], [`RbLink`], [`RbNode`] |
//! [`root`] | [`RbRoot`], [`RbRootCached`] |
//! [`util`] | `first` / `last` / `next` / `prev`, post-order walk, iterators |
//! [`red_black`] | link, insert fixup, erase, replace, rotations, checker |
//! [`error`] | [`InvariantViolation`] |

pub mod error;
pub mod red_black;
pub mod root;
pub mod types;
pub mod util;

pub use error::InvariantViolation;
pub use red_black::{
    assert_cached, assert_ordered, assert_red_black_tree, erase, erase_cached, first_cached,
    insert_fixup, insert_fixup_cached, link_node, print, replace_node, replace_node_cached,
    rotate_left, rotate_right, Slot, ROTATE_TARGET,
};
pub use root::{RbRoot, RbRootCached};
pub use types::{Color, RbLink, RbNode};
pub use util::{
    first, first_postorder, height, iter, iter_postorder, iter_rev, last, next, next_postorder,
    prev, size, Iter, PostorderIter,
};
