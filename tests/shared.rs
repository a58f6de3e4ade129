use std::thread;

use bucket_set::{Error, LockPolicy, Options, SharedSortedSet, SortedSet};

const THREADS: i64 = 8;
const PER_THREAD: i64 = 500;

/// Concurrent disjoint inserts under the blocking policy serialize cleanly:
/// every item lands exactly once and the final order is globally sorted.
#[test]
fn blocking_concurrent_inserts_serialize() {
    let set = SharedSortedSet::new();

    thread::scope(|scope| {
        for t in 0..THREADS {
            let handle = set.clone();
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    let value = t * PER_THREAD + i;
                    assert_eq!(handle.insert(value), Ok(true));
                }
            });
        }
    });

    assert_eq!(set.len(), Ok((THREADS * PER_THREAD) as usize));
    let expected: Vec<i64> = (0..THREADS * PER_THREAD).collect();
    assert_eq!(set.to_vec(), Ok(expected));
}

/// Under try-acquire, callers retry on `Contended`; the retries converge to
/// the same final contents a serial run would produce.
#[test]
fn try_acquire_retries_converge() {
    let options = Options {
        lock_policy: LockPolicy::TryAcquire,
        max_bucket_size: 16,
        ..Options::default()
    };
    let set = SharedSortedSet::with_options(options).unwrap();

    thread::scope(|scope| {
        for t in 0..4i64 {
            let handle = set.clone();
            scope.spawn(move || {
                for i in 0..200i64 {
                    let value = t * 200 + i;
                    loop {
                        match handle.insert(value) {
                            Ok(added) => {
                                assert!(added, "value {value} inserted twice");
                                break;
                            }
                            Err(Error::Contended) => thread::yield_now(),
                            Err(other) => panic!("unexpected error: {other}"),
                        }
                    }
                }
            });
        }
    });

    let contents = loop {
        match set.to_vec() {
            Ok(contents) => break contents,
            Err(Error::Contended) => thread::yield_now(),
            Err(other) => panic!("unexpected error: {other}"),
        }
    };
    assert_eq!(contents, (0..800i64).collect::<Vec<_>>());
}

/// Mixed readers and writers observe consistent snapshots: a slice taken
/// under the lock is always sorted and duplicate-free.
#[test]
fn readers_see_consistent_snapshots() {
    let options = Options {
        max_bucket_size: 8,
        ..Options::default()
    };
    let set = SharedSortedSet::with_options(options).unwrap();

    thread::scope(|scope| {
        let writer = set.clone();
        scope.spawn(move || {
            for value in 0..2_000i64 {
                writer.insert(value).unwrap();
            }
        });

        let remover = set.clone();
        scope.spawn(move || {
            for value in (0..2_000i64).step_by(3) {
                let _ = remover.remove(&value).unwrap();
            }
        });

        let reader = set.clone();
        scope.spawn(move || {
            for _ in 0..200 {
                let snapshot = reader.slice(0, 64).unwrap();
                assert!(
                    snapshot.windows(2).all(|pair| pair[0] < pair[1]),
                    "snapshot not strictly increasing: {snapshot:?}"
                );
            }
        });
    });
}

/// A pre-built engine can be shared after the fact.
#[test]
fn wrapping_an_existing_set() {
    let mut engine = SortedSet::new();
    engine.insert(2);
    engine.insert(1);

    let shared = SharedSortedSet::from_set(engine, LockPolicy::Blocking);
    assert_eq!(shared.rank_of(&2), Ok(1));
    assert_eq!(shared.index_remove(&1), Ok(0));
    assert_eq!(shared.len(), Ok(1));
}
