//! Property tests for booking consolidation: idempotence, coverage
//! preservation, output invariants, and order independence, exercised
//! over randomized day schedules.

use std::collections::BTreeSet;

use bookwise_core::{merge_bookings, merge_pairs, Booking};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_schedule(rng: &mut StdRng, len: usize) -> Vec<Booking> {
    (0..len)
        .map(|_| {
            let start = rng.gen_range(0..24);
            let end = start + rng.gen_range(1..=4);
            Booking::new(start, end).unwrap()
        })
        .collect()
}

fn covered_points(bookings: &[Booking]) -> BTreeSet<i64> {
    bookings
        .iter()
        .flat_map(|b| b.start()..=b.end())
        .collect()
}

fn assert_sorted_and_separated(merged: &[Booking]) {
    for pair in merged.windows(2) {
        assert!(
            pair[0].end() < pair[1].start(),
            "adjacent bookings {:?} and {:?} overlap or touch",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn merge_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let schedule = random_schedule(&mut rng, 40);
        let once = merge_bookings(&schedule).unwrap();
        let twice = merge_bookings(&once).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn merge_preserves_coverage() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let schedule = random_schedule(&mut rng, 40);
        let merged = merge_bookings(&schedule).unwrap();
        assert_eq!(covered_points(&schedule), covered_points(&merged));
    }
}

#[test]
fn merge_output_is_sorted_and_separated() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..50 {
        let schedule = random_schedule(&mut rng, 40);
        let merged = merge_bookings(&schedule).unwrap();
        assert_sorted_and_separated(&merged);
    }
}

#[test]
fn merge_is_order_independent() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..50 {
        let schedule = random_schedule(&mut rng, 40);
        let merged = merge_bookings(&schedule).unwrap();

        let mut shuffled = schedule.clone();
        for i in (1..shuffled.len()).rev() {
            shuffled.swap(i, rng.gen_range(0..=i));
        }
        assert_eq!(merge_bookings(&shuffled).unwrap(), merged);
    }
}

#[test]
fn large_randomized_schedule() {
    let mut rng = StdRng::seed_from_u64(19);
    let schedule = random_schedule(&mut rng, 1200);

    let merged = merge_bookings(&schedule).unwrap();
    assert_sorted_and_separated(&merged);
    assert_eq!(covered_points(&schedule), covered_points(&merged));
    assert!(merged.len() <= schedule.len());
}

#[test]
fn fixed_scenarios_via_pair_interface() {
    let cases: Vec<(Vec<[i64; 2]>, Vec<[i64; 2]>)> = vec![
        (
            vec![[9, 12], [11, 13], [14, 17], [16, 18]],
            vec![[9, 13], [14, 18]],
        ),
        (
            vec![[9, 10], [11, 12], [13, 14]],
            vec![[9, 10], [11, 12], [13, 14]],
        ),
        (vec![[9, 10], [10, 11], [11, 12]], vec![[9, 12]]),
        (vec![[9, 12], [12, 13], [14, 17]], vec![[9, 13], [14, 17]]),
        (vec![], vec![]),
    ];

    for (input, expected) in cases {
        assert_eq!(merge_pairs(&input).unwrap(), expected, "input: {input:?}");
    }
}
