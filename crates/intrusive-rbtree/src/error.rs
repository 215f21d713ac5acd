//! Typed report of a broken tree invariant.

use std::cmp::Ordering;

use thiserror::Error;

/// A broken red-black or linkage invariant, as reported by the checker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root node {0} has a parent")]
    RootHasParent(u32),

    #[error("root node {0} is red")]
    RedRoot(u32),

    #[error("node {0} is in the tree but not marked linked")]
    NotLinked(u32),

    #[error("red node {parent} has red child {child}")]
    RedChildOfRed { parent: u32, child: u32 },

    #[error("node {child} hangs under {parent} but records parent {recorded:?}")]
    BrokenParentLink {
        parent: u32,
        child: u32,
        recorded: Option<u32>,
    },

    #[error("black height mismatch under node {node}: left {left}, right {right}")]
    BlackHeightMismatch { node: u32, left: usize, right: usize },

    #[error("node {node} is reachable twice")]
    Cycle { node: u32 },

    #[error("node {prev} sorts {ordering:?} relative to its successor {next}")]
    OutOfOrder {
        prev: u32,
        next: u32,
        ordering: Ordering,
    },

    #[error("expected leftmost {expected:?}, cache holds {cached:?}")]
    StaleLeftmost {
        expected: Option<u32>,
        cached: Option<u32>,
    },
}
