use avlbench::set::{ConcurrentSet, SequentialSet};
use avlbench::util::random::Random;
use crossbeam_utils::thread;
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::fmt::Debug;

#[derive(Clone, Debug, PartialEq)]
enum Operation {
    Insert,
    Search,
    Remove,
}

#[derive(PartialEq)]
enum OperationType {
    Some, // the operation for existing key on the set
    None, // the operation for not existing key on the set
}

/// Run random operations on the set and on `std::collections::BTreeSet` side by side.
///
/// `check` is called on the set after every operation.
pub fn stress_sequential<K, S, F>(iter: u64, seed: u64, check: F)
where
    F: Fn(&S),
    K: Ord + Clone + Random + Debug,
    S: SequentialSet<K>,
{
    // 10 times try to get not existing key, or return if failing
    let gen_not_existing_key = |rng: &mut StdRng, set: &BTreeSet<K>| {
        let mut key = K::gen(rng);

        for _ in 0..10 {
            if !set.contains(&key) {
                return Ok(key);
            }

            key = K::gen(rng);
        }

        Err(())
    };

    let ops = [Operation::Insert, Operation::Search, Operation::Remove];
    let types = [OperationType::Some, OperationType::None];

    let mut set = S::new();
    let mut ref_set: BTreeSet<K> = BTreeSet::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 1..=iter {
        let t = types.choose(&mut rng).unwrap();
        let existing_key = if ref_set.is_empty() {
            None
        } else {
            let nth = rng.gen_range(0..ref_set.len());
            ref_set.iter().nth(nth).cloned()
        };

        if existing_key.is_none() || *t == OperationType::None {
            // run operation with not existing key
            let not_existing_key = if let Ok(key) = gen_not_existing_key(&mut rng, &ref_set) {
                key
            } else {
                continue;
            };

            match ops.choose(&mut rng).unwrap() {
                Operation::Insert => {
                    // should success
                    assert!(
                        set.insert(not_existing_key.clone()),
                        "[{:0>10}] InsertNone: {:?}",
                        i,
                        not_existing_key
                    );
                    assert!(ref_set.insert(not_existing_key));
                }
                Operation::Search => {
                    // should fail
                    assert!(
                        !set.search(&not_existing_key),
                        "[{:0>10}] SearchNone: {:?}",
                        i,
                        not_existing_key
                    );
                }
                Operation::Remove => {
                    // should fail
                    assert!(
                        !set.remove(&not_existing_key),
                        "[{:0>10}] RemoveNone: {:?}",
                        i,
                        not_existing_key
                    );
                }
            }
        } else {
            // run operation with existing key
            let existing_key = existing_key.unwrap();

            match ops.choose(&mut rng).unwrap() {
                Operation::Insert => {
                    // should fail
                    assert!(
                        !set.insert(existing_key.clone()),
                        "[{:0>10}] InsertSome: {:?}",
                        i,
                        existing_key
                    );
                }
                Operation::Search => {
                    // should success
                    assert!(
                        set.search(&existing_key),
                        "[{:0>10}] SearchSome: {:?}",
                        i,
                        existing_key
                    );
                }
                Operation::Remove => {
                    // should success
                    assert!(
                        set.remove(&existing_key),
                        "[{:0>10}] RemoveSome: {:?}",
                        i,
                        existing_key
                    );
                    assert!(ref_set.remove(&existing_key));
                }
            }
        }

        assert_eq!(set.len(), ref_set.len(), "[{:0>10}] size", i);
        check(&set);
    }

    assert!(set.traverse().into_iter().eq(ref_set.iter()));
}

/// Each thread inserts its own disjoint keys, checks them, then removes the even ones.
pub fn stress_concurrent<S>(per_thread: u64, thread_num: u64) -> S
where
    S: Sync + ConcurrentSet<u64>,
{
    let set = S::new();

    thread::scope(|s| {
        for t in 0..thread_num {
            let set = &set;

            s.spawn(move |_| {
                let mut keys: Vec<u64> = (0..per_thread).map(|i| i * thread_num + t).collect();
                keys.shuffle(&mut rand::thread_rng());

                for key in &keys {
                    assert!(set.insert(*key));
                }

                for key in &keys {
                    assert!(!set.insert(*key));
                    assert!(set.search(key));
                }

                for key in keys.iter().filter(|key| *key % 2 == 0) {
                    assert!(set.remove(key));
                    assert!(!set.search(key));
                }
            });
        }
    })
    .unwrap();

    set
}
