use std::collections::BTreeSet;

use bst_set::{BstSet, EmptyTreeError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Generates keys in a range narrow enough to force collisions.
fn key_strategy() -> impl Strategy<Value = i64> {
    -500i64..500i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    Min,
    Max,
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => key_strategy().prop_map(SetOp::Insert),
        3 => key_strategy().prop_map(SetOp::Remove),
        2 => key_strategy().prop_map(SetOp::Contains),
        1 => Just(SetOp::Min),
        1 => Just(SetOp::Max),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Replays a random sequence of insert/remove/contains/min/max against
    /// a `BTreeSet` model and asserts identical results at every step, with
    /// the empty-set error contract checked whenever the model is empty.
    #[test]
    fn ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut set: BstSet<i64> = BstSet::new();
        let mut model: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                SetOp::Insert(k) => {
                    prop_assert_eq!(set.insert(*k), model.insert(*k), "insert({})", k);
                }
                SetOp::Remove(k) => {
                    if model.is_empty() {
                        prop_assert_eq!(set.remove(k), Err(EmptyTreeError));
                    } else {
                        let expected = model.remove(k).then_some(*k);
                        prop_assert_eq!(set.remove(k), Ok(expected), "remove({})", k);
                    }
                }
                SetOp::Contains(k) => {
                    if model.is_empty() {
                        prop_assert_eq!(set.contains(k), Err(EmptyTreeError));
                    } else {
                        prop_assert_eq!(set.contains(k), Ok(model.contains(k)), "contains({})", k);
                    }
                }
                SetOp::Min => {
                    prop_assert_eq!(set.min(), model.first().ok_or(EmptyTreeError));
                }
                SetOp::Max => {
                    prop_assert_eq!(set.max(), model.last().ok_or(EmptyTreeError));
                }
            }

            prop_assert_eq!(set.len(), model.len());
            prop_assert_eq!(set.is_empty(), model.is_empty());
        }

        // In-order traversal must agree with the model's sorted order.
        prop_assert!(set.iter().eq(model.iter()));
    }

    /// Whatever the insertion order, in-order traversal yields strictly
    /// ascending keys and every inserted key can be found.
    #[test]
    fn in_order_is_strictly_ascending(keys in proptest::collection::vec(key_strategy(), 1..200)) {
        let set: BstSet<i64> = keys.iter().copied().collect();

        let in_order: Vec<i64> = set.iter().copied().collect();
        prop_assert!(in_order.windows(2).all(|pair| pair[0] < pair[1]));

        for key in &keys {
            prop_assert_eq!(set.contains(key), Ok(true));
        }
    }

    /// Pre-order and post-order visit each key exactly once; sorting their
    /// output reproduces the in-order sequence.
    #[test]
    fn traversals_are_permutations(keys in proptest::collection::vec(key_strategy(), 0..200)) {
        let set: BstSet<i64> = keys.iter().copied().collect();
        let in_order: Vec<i64> = set.iter().copied().collect();

        let mut pre: Vec<i64> = set.pre_order().copied().collect();
        pre.sort_unstable();
        prop_assert_eq!(&pre, &in_order);

        let mut post: Vec<i64> = set.post_order().copied().collect();
        post.sort_unstable();
        prop_assert_eq!(&post, &in_order);
    }
}

// ─── Deterministic scenarios ─────────────────────────────────────────────────

#[test]
fn round_trip() {
    let set = BstSet::from([5, 3, 8, 1, 4, 7, 9]);

    let in_order: Vec<i32> = set.iter().copied().collect();
    assert_eq!(in_order, [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(set.min(), Ok(&1));
    assert_eq!(set.max(), Ok(&9));
    assert_eq!(set.len(), 7);
}

#[test]
fn removing_two_child_root_promotes_successor() {
    let mut set = BstSet::from([5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(set.remove(&5), Ok(Some(5)));
    assert_eq!(set.len(), 6);
    assert_eq!(set.contains(&5), Ok(false));

    let in_order: Vec<i32> = set.iter().copied().collect();
    assert_eq!(in_order, [1, 3, 4, 7, 8, 9]);
}

#[test]
fn duplicate_insertion_is_rejected_without_mutation() {
    let mut set = BstSet::new();
    assert!(set.insert(7));
    let len_after_first = set.len();

    assert!(!set.insert(7));
    assert_eq!(set.len(), len_after_first);
}

#[test]
fn every_guarded_operation_errors_on_empty_set() {
    let mut set: BstSet<i32> = BstSet::new();

    assert_eq!(set.contains(&1), Err(EmptyTreeError));
    assert_eq!(set.min(), Err(EmptyTreeError));
    assert_eq!(set.max(), Err(EmptyTreeError));
    assert_eq!(set.replace_key(&1, 2), Err(EmptyTreeError));
    assert_eq!(set.remove(&1), Err(EmptyTreeError));
}

#[test]
fn traversing_an_empty_set_yields_nothing() {
    let set: BstSet<i32> = BstSet::new();
    assert_eq!(set.iter().next(), None);
    assert_eq!(set.pre_order().next(), None);
    assert_eq!(set.post_order().next(), None);
}

#[test]
fn search_distinguishes_present_and_absent() {
    let set = BstSet::from([5, 3, 8]);
    assert_eq!(set.contains(&5), Ok(true));
    assert_eq!(set.contains(&3), Ok(true));
    assert_eq!(set.contains(&8), Ok(true));
    assert_eq!(set.contains(&4), Ok(false));
    assert_eq!(set.contains(&100), Ok(false));
}

#[test]
fn removing_absent_key_leaves_shape_unchanged() {
    let mut set = BstSet::from([5, 3, 8, 1]);
    let shape_before: Vec<i32> = set.pre_order().copied().collect();

    assert_eq!(set.remove(&6), Ok(None));

    assert_eq!(set.len(), 4);
    let shape_after: Vec<i32> = set.pre_order().copied().collect();
    assert_eq!(shape_after, shape_before);
}

#[test]
fn replace_key_updates_exactly_one_node() {
    let mut set = BstSet::from([1, 5, 9]);

    assert_eq!(set.replace_key(&5, 6), Ok(true));
    assert_eq!(set.len(), 3);
    assert_eq!(set.contains(&5), Ok(false));
    assert_eq!(set.contains(&6), Ok(true));

    let in_order: Vec<i32> = set.iter().copied().collect();
    assert_eq!(in_order, [1, 6, 9]);
}

#[test]
fn replace_key_on_missing_key_mutates_nothing() {
    let mut set = BstSet::from([1, 5, 9]);
    let before: Vec<i32> = set.pre_order().copied().collect();

    assert_eq!(set.replace_key(&4, 100), Ok(false));

    assert_eq!(set.len(), 3);
    let after: Vec<i32> = set.pre_order().copied().collect();
    assert_eq!(after, before);
}

#[test]
fn replace_key_keeps_the_node_position() {
    // The node is rewritten in place, not re-inserted: an order-incompatible
    // replacement stays at the old position, which is exactly the documented
    // caller-trust property.
    let mut set = BstSet::from([1, 5, 9]);

    assert_eq!(set.replace_key(&1, 100), Ok(true));

    let in_order: Vec<i32> = set.iter().copied().collect();
    assert_eq!(in_order, [100, 5, 9]);
}

#[test]
fn removal_cases_leaf_one_child_two_children() {
    let mut set = BstSet::from([50, 30, 70, 20, 40, 60, 80, 65]);

    // Leaf.
    assert_eq!(set.remove(&20), Ok(Some(20)));
    // One child: 60 keeps only 65 after this.
    assert_eq!(set.remove(&60), Ok(Some(60)));
    // Two children: 70's successor is 80.
    assert_eq!(set.remove(&70), Ok(Some(70)));

    let in_order: Vec<i32> = set.iter().copied().collect();
    assert_eq!(in_order, [30, 40, 50, 65, 80]);
}

#[test]
fn drain_by_removing_min_until_empty() {
    let mut set = BstSet::from([5, 3, 8, 1, 4, 7, 9]);
    let mut drained = Vec::new();

    while !set.is_empty() {
        let min = *set.min().unwrap();
        drained.push(set.remove(&min).unwrap().unwrap());
    }

    assert_eq!(drained, [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(set.len(), 0);
    assert_eq!(set.min(), Err(EmptyTreeError));
}

#[test]
fn into_iter_moves_keys_out_in_ascending_order() {
    let set = BstSet::from([5, 3, 8, 1, 4]);
    let keys: Vec<i32> = set.into_iter().collect();
    assert_eq!(keys, [1, 3, 4, 5, 8]);
}

#[test]
fn iterators_report_exact_lengths() {
    let set = BstSet::from([2, 1, 3]);

    assert_eq!(set.iter().len(), 3);
    assert_eq!(set.pre_order().len(), 3);
    assert_eq!(set.post_order().len(), 3);

    let mut iter = set.iter();
    iter.next();
    assert_eq!(iter.len(), 2);
}

#[test]
fn equality_ignores_tree_shape() {
    // Same keys, different insertion orders, so different shapes.
    let balanced = BstSet::from([2, 1, 3]);
    let degenerate = BstSet::from([1, 2, 3]);

    assert_eq!(balanced, degenerate);
    assert_ne!(balanced, BstSet::from([1, 2, 4]));
}

#[test]
fn clear_empties_the_set() {
    let mut set = BstSet::from([1, 2, 3]);
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.min(), Err(EmptyTreeError));
    assert!(set.insert(10));
    assert_eq!(set.len(), 1);
}

#[test]
fn debug_formats_as_a_set() {
    let set = BstSet::from([3, 1, 2]);
    assert_eq!(format!("{set:?}"), "{1, 2, 3}");
}

#[test]
fn borrowed_lookups_work() {
    let set: BstSet<String> = ["pear", "apple", "quince"].into_iter().map(String::from).collect();

    assert_eq!(set.contains("apple"), Ok(true));
    assert_eq!(set.contains("plum"), Ok(false));
    assert_eq!(set.min().map(String::as_str), Ok("apple"));
}
