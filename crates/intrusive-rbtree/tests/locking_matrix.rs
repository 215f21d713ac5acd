mod common;

use std::sync::{Arc, RwLock};
use std::thread;

use common::{check, insert, keys, remove, Record};
use intrusive_rbtree::RbRoot;

struct Shared {
    arena: Vec<Record>,
    root: RbRoot,
}

#[test]
fn writers_serialize_behind_a_lock() {
    let shared = Arc::new(RwLock::new(Shared {
        arena: Vec::new(),
        root: RbRoot::new(),
    }));

    let writers: Vec<_> = (0..4i64)
        .map(|t| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..100 {
                    let mut guard = shared.write().unwrap();
                    let Shared { arena, root } = &mut *guard;
                    insert(arena, root, t * 1000 + i);
                    if i % 3 == 0 {
                        remove(arena, root, t * 1000 + i);
                    }
                }
            })
        })
        .collect();
    for w in writers {
        w.join().unwrap();
    }

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let guard = shared.read().unwrap();
                check(&guard.arena, &guard.root, "concurrent read");
                keys(&guard.arena, &guard.root).len()
            })
        })
        .collect();
    for r in readers {
        assert_eq!(r.join().unwrap(), 4 * 66);
    }
}
