//! The red-black engine: linking, rebalancing, erasure, replacement.
//!
//! None of these functions compare keys. The caller descends the tree with
//! its own comparison, links the new node at the empty [`Slot`] it found,
//! and then calls [`insert_fixup`].

pub mod assert;
pub mod cached;
pub mod erase;
pub mod insert;
pub mod print;
pub mod replace;
pub mod rotate;

pub use assert::{assert_cached, assert_ordered, assert_red_black_tree};
pub use cached::{erase_cached, first_cached, insert_fixup_cached, replace_node_cached};
pub use erase::erase;
pub use insert::{insert_fixup, link_node, Slot};
pub use print::print;
pub use replace::replace_node;
pub use rotate::{rotate_left, rotate_right, ROTATE_TARGET};
