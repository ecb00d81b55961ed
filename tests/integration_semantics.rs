//! Structural post-conditions of the workload shapes each template
//! executes, checked at full default-table scale directly against the
//! container abstraction.

use container_benchmark::element::SmallElement;
use container_benchmark::sequence::Sequence;
use std::collections::{LinkedList, VecDeque};

fn populated<S: Sequence<SmallElement>>(count: usize) -> S {
    let mut seq = S::default();
    for _ in 0..count {
        seq.push_back(SmallElement::default());
    }
    seq
}

fn front_back_insert_sizes<S: Sequence<SmallElement>>() {
    let op_count = 10240;
    let mut front = S::default();
    let mut back = S::default();
    for _ in 0..op_count {
        front.push_front(SmallElement::default());
        back.push_back(SmallElement::default());
    }
    assert_eq!(front.len(), op_count);
    assert_eq!(back.len(), op_count);
}

fn insert_middle_grows_by_count<S: Sequence<SmallElement>>() {
    let (op_count, initial_size) = (1, 10240);
    let mut seq: S = populated(initial_size);
    let midpoint = initial_size / 2;
    for _ in 0..op_count {
        seq.insert_at(midpoint, SmallElement::default());
    }
    assert_eq!(seq.len(), initial_size + op_count);
}

fn remove_front_drains_exactly<S: Sequence<SmallElement>>() {
    let op_count = 10240;
    let mut seq: S = populated(op_count);
    let mut removals = 0;
    while seq.pop_front().is_some() {
        removals += 1;
    }
    assert_eq!(removals, op_count);
    assert!(seq.is_empty());
}

fn remove_middle_shrinks_by_count<S: Sequence<SmallElement>>() {
    let (op_count, initial_size) = (512, 10240);
    let mut seq: S = populated(initial_size + 1);
    let before = seq.len();
    let cursor = (initial_size - op_count) / 2;
    for _ in 0..op_count {
        seq.remove_at(cursor);
    }
    assert_eq!(seq.len(), before - op_count);
}

#[test]
fn vec_workload_shapes() {
    front_back_insert_sizes::<Vec<SmallElement>>();
    insert_middle_grows_by_count::<Vec<SmallElement>>();
    remove_front_drains_exactly::<Vec<SmallElement>>();
    remove_middle_shrinks_by_count::<Vec<SmallElement>>();
}

#[test]
fn deque_workload_shapes() {
    front_back_insert_sizes::<VecDeque<SmallElement>>();
    insert_middle_grows_by_count::<VecDeque<SmallElement>>();
    remove_front_drains_exactly::<VecDeque<SmallElement>>();
    remove_middle_shrinks_by_count::<VecDeque<SmallElement>>();
}

#[test]
fn list_workload_shapes() {
    front_back_insert_sizes::<LinkedList<SmallElement>>();
    insert_middle_grows_by_count::<LinkedList<SmallElement>>();
    remove_front_drains_exactly::<LinkedList<SmallElement>>();
    remove_middle_shrinks_by_count::<LinkedList<SmallElement>>();
}

#[test]
fn traversals_agree_on_content() {
    let mut seq: VecDeque<u32> = VecDeque::new();
    for value in 0..10240u32 {
        Sequence::push_back(&mut seq, value);
    }

    let mut forward = Vec::new();
    seq.for_each(|&value| forward.push(value));
    let mut backward = Vec::new();
    seq.for_each_rev(|&value| backward.push(value));

    assert_eq!(forward.len(), backward.len());
    let reversed: Vec<u32> = backward.iter().rev().copied().collect();
    assert_eq!(forward, reversed);
}
