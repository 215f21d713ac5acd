//! Caller-side glue shared by the integration tests: a record type, the
//! comparison-driven descent the engine leaves to its users, and a seeded
//! fuzzer.

#![allow(dead_code)]

use std::cmp::Ordering;

use intrusive_rbtree::{
    assert_ordered, erase, impl_rb_node, insert_fixup, iter, link_node, print, RbLink, RbRoot,
    Slot,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use simplelog::{Config, LevelFilter, TestLogger};

#[derive(Debug)]
pub struct Record {
    pub key: i64,
    pub value: i64,
    pub link: RbLink,
}

impl_rb_node!(Record, link);

impl Record {
    pub fn new(key: i64) -> Self {
        Self {
            key,
            value: key * 10,
            link: RbLink::new(),
        }
    }
}

pub fn by_key(a: &Record, b: &Record) -> Ordering {
    a.key.cmp(&b.key)
}

pub fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

/// Empty slot where `key` belongs, plus whether the descent only went left.
pub fn locate(arena: &[Record], root: &RbRoot, key: i64) -> (Slot, bool) {
    let mut slot = Slot::Root;
    let mut leftmost = true;
    let mut curr = root.node();
    while let Some(c) = curr {
        let link = &arena[c as usize].link;
        if key < arena[c as usize].key {
            slot = Slot::Left(c);
            curr = link.left();
        } else {
            slot = Slot::Right(c);
            curr = link.right();
            leftmost = false;
        }
    }
    (slot, leftmost)
}

pub fn find(arena: &[Record], root: &RbRoot, key: i64) -> Option<u32> {
    let mut curr = root.node();
    while let Some(c) = curr {
        let rec = &arena[c as usize];
        curr = match key.cmp(&rec.key) {
            Ordering::Equal => return Some(c),
            Ordering::Less => rec.link.left(),
            Ordering::Greater => rec.link.right(),
        };
    }
    None
}

/// Links an already-allocated record into the tree.
pub fn insert_index(arena: &mut [Record], root: &mut RbRoot, idx: u32) {
    let (slot, _) = locate(arena, root, arena[idx as usize].key);
    link_node(arena, root, idx, slot);
    insert_fixup(arena, root, idx);
}

/// Allocates a record for `key`, links it, and validates the tree.
pub fn insert(arena: &mut Vec<Record>, root: &mut RbRoot, key: i64) -> u32 {
    arena.push(Record::new(key));
    let idx = (arena.len() - 1) as u32;
    insert_index(arena, root, idx);
    check(arena, root, &format!("insert({key})"));
    idx
}

/// Erases the record holding `key`, if any, and validates the tree.
pub fn remove(arena: &mut [Record], root: &mut RbRoot, key: i64) -> Option<u32> {
    let idx = find(arena, root, key)?;
    erase(arena, root, idx);
    check(arena, root, &format!("remove({key})"));
    Some(idx)
}

pub fn keys(arena: &[Record], root: &RbRoot) -> Vec<i64> {
    iter(arena, root).map(|i| arena[i as usize].key).collect()
}

/// Panics with a dump of the tree if any invariant is broken.
pub fn check(arena: &[Record], root: &RbRoot, step: &str) -> usize {
    match assert_ordered(arena, root, by_key) {
        Ok(bh) => bh,
        Err(err) => panic!(
            "invalid red-black tree after {step}: {err}\n{}",
            print(arena, root, |r| format!("{} = {}", r.key, r.value))
        ),
    }
}

/// Seeded xoshiro256** source for reproducible scenarios.
pub struct Fuzzer {
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    pub fn new(seed: [u8; 32]) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..items.len());
        &items[idx]
    }
}
