//! Counts rotations per operation through the `ROTATE_TARGET` trace events.
//! Runs in its own binary so the counting logger is the only one installed.

mod common;

use std::cell::Cell;
use std::collections::BTreeSet;

use common::{find, insert, remove, Fuzzer, Record};
use intrusive_rbtree::{RbRoot, ROTATE_TARGET};
use log::{LevelFilter, Log, Metadata};

thread_local! {
    static ROTATIONS: Cell<usize> = const { Cell::new(0) };
}

struct RotationCounter;

impl Log for RotationCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == ROTATE_TARGET
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            ROTATIONS.with(|c| c.set(c.get() + 1));
        }
    }

    fn flush(&self) {}
}

static COUNTER: RotationCounter = RotationCounter;

fn install() {
    let _ = log::set_logger(&COUNTER);
    log::set_max_level(LevelFilter::Trace);
}

/// Rotations performed by `f` on this thread.
fn rotations<T>(f: impl FnOnce() -> T) -> (T, usize) {
    ROTATIONS.with(|c| c.set(0));
    let out = f();
    (out, ROTATIONS.with(Cell::get))
}

#[test]
fn insert_rotates_at_most_twice_and_erase_at_most_three_times() {
    install();
    let mut fuzzer = Fuzzer::new([21u8; 32]);
    let mut arena = Vec::<Record>::new();
    let mut root = RbRoot::new();
    let mut model = BTreeSet::new();
    let mut max_insert = 0;
    let mut max_erase = 0;

    for _ in 0..6000 {
        let key = fuzzer.random_int(0, 400);
        if fuzzer.random_bool(0.55) {
            if model.insert(key) {
                let (_, n) = rotations(|| insert(&mut arena, &mut root, key));
                assert!(n <= 2, "insert({key}) rotated {n} times");
                max_insert = max_insert.max(n);
            }
        } else if model.remove(&key) {
            let (removed, n) = rotations(|| remove(&mut arena, &mut root, key));
            assert!(removed.is_some());
            assert!(n <= 3, "erase({key}) rotated {n} times");
            max_erase = max_erase.max(n);
        } else {
            assert_eq!(find(&arena, &root, key), None);
        }
    }

    assert_eq!(max_insert, 2);
    assert!(max_erase >= 2);
}

#[test]
fn ascending_run_rotates_at_most_once_per_insert() {
    install();
    let mut arena = Vec::<Record>::new();
    let mut root = RbRoot::new();
    let mut total = 0;
    for key in 0..512 {
        let (_, n) = rotations(|| insert(&mut arena, &mut root, key));
        // Every new key lands rightmost, so no zig-zag case arises.
        assert!(n <= 1, "insert({key}) rotated {n} times");
        total += n;
    }
    assert!(total > 0);
}

#[test]
fn draining_from_the_left_stays_within_three_rotations() {
    install();
    let mut arena = Vec::<Record>::new();
    let mut root = RbRoot::new();
    for key in 0..512 {
        insert(&mut arena, &mut root, key);
    }
    for key in 0..512 {
        let (_, n) = rotations(|| remove(&mut arena, &mut root, key));
        assert!(n <= 3, "erase({key}) rotated {n} times");
    }
    assert!(root.is_empty());
}
