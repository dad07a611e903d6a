//! Property tests over the simulation driver and the container flavors.

use amort::sim::{simulate, simulate_unit, Unit};
use amort::{DynArray, Error, Queue, Stack};

use quickcheck_macros::quickcheck;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

#[quickcheck]
fn final_size_equals_operation_count(m: u16) -> bool {
    let s = simulate::<DynArray<u64>>(m as i64).unwrap();
    s.final_size == m as usize
}

#[quickcheck]
fn final_capacity_is_a_covering_power_of_two(m: u16) -> bool {
    [Unit::Array, Unit::Stack, Unit::Queue].iter().all(|&unit| {
        let s = simulate_unit(unit, m as i64).unwrap();
        s.final_capacity.is_power_of_two() && s.final_capacity >= (m as usize).max(1)
    })
}

#[quickcheck]
fn total_copies_sum_the_geometric_series(m: u16) -> bool {
    let s = simulate::<Stack<u64>>(m as i64).unwrap();
    s.total_copies == s.final_capacity as u64 - 1
}

#[quickcheck]
fn total_cost_stays_within_the_charge_3_bound(m: u16) -> bool {
    let s = simulate::<Queue<u64>>(m as i64).unwrap();
    s.total_actual_cost <= 3 * m as u64
}

#[quickcheck]
fn every_step_amortizes_to_three_with_a_solvent_bank(m: u16) -> bool {
    let mut array = DynArray::new();
    (0..m as u64).all(|i| {
        let step = array.push(i).unwrap();
        step.amortized_cost == 3
            && step.bank_after >= 0
            && step.actual_cost as i64 + (step.phi_after - step.phi_before) == step.amortized_cost
    })
}

#[quickcheck]
fn array_and_stack_preserve_insertion_order(values: Vec<u32>) -> bool {
    let mut array = DynArray::new();
    let mut stack = Stack::new();
    for &v in &values {
        array.push(v).unwrap();
        stack.push(v).unwrap();
    }

    array.as_slice() == &values[..] && stack.as_slice() == &values[..]
}

#[quickcheck]
fn popping_reverses_the_push_order(values: Vec<u32>) -> bool {
    let mut stack = Stack::new();
    for &v in &values {
        stack.push(v).unwrap();
    }

    let mut popped = Vec::with_capacity(values.len());
    while let Ok((v, _)) = stack.pop() {
        popped.push(v);
    }
    popped.reverse();

    popped == values && stack.is_empty()
}

#[test]
fn queue_stays_fifo_under_random_interleaving() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut queue = Queue::new();
    let mut model = VecDeque::new();
    let mut next = 0u64;

    for _ in 0..10_000 {
        if model.is_empty() || rng.gen_bool(0.6) {
            queue.enqueue(next).unwrap();
            model.push_back(next);
            next += 1;
        } else {
            let expected = model.pop_front().unwrap();
            let (value, cost) = queue.dequeue().unwrap();
            assert_eq!(value, expected);
            assert_eq!(cost.moved, model.len());
        }
        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.front().ok(), model.front());
    }
}

#[test]
fn empty_containers_reject_every_read() {
    assert_eq!(DynArray::<u64>::new().get(0), None);
    assert_eq!(Stack::<u64>::new().peek(), Err(Error::EmptyContainer));
    assert_eq!(Stack::<u64>::new().pop(), Err(Error::EmptyContainer));
    assert_eq!(Queue::<u64>::new().front(), Err(Error::EmptyContainer));
    assert_eq!(Queue::<u64>::new().dequeue(), Err(Error::EmptyContainer));
}

#[test]
fn negative_operation_counts_are_rejected_per_flavor() {
    for unit in [Unit::Array, Unit::Stack, Unit::Queue] {
        assert_eq!(simulate_unit(unit, -1), Err(Error::InvalidOperationCount(-1)));
    }
}
