use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

const SEEDS: [u64; 4] = [1, 7, 42, 2024];

fn random_vec(rng: &mut StdRng, len: usize, range: i32) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(-range..range)).collect()
}

#[test]
fn invariant_after_random_operations() {
    for seed in SEEDS.iter() {
        let mut rng = StdRng::seed_from_u64(*seed);
        let mut heap = MinMaxHeap::from(random_vec(&mut rng, 200, 50));
        heap.check();
        for _ in 0..2000 {
            match rng.gen_range(0..4) {
                0 | 1 => heap.push(rng.gen_range(-50..50)),
                2 => {
                    heap.pop_min();
                }
                _ => {
                    heap.pop_max();
                }
            }
            heap.check();
        }
    }
}

#[test]
fn min_extraction_is_sorted() {
    for seed in SEEDS.iter() {
        let mut rng = StdRng::seed_from_u64(*seed);
        let len = rng.gen_range(0..500);
        let input = random_vec(&mut rng, len, 100);
        let mut heap = MinMaxHeap::from(input.clone());
        let mut out = Vec::new();
        while let Some(value) = heap.pop_min() {
            out.push(value);
        }
        let mut expected = input;
        expected.sort();
        assert_eq!(out, expected);
    }
}

#[test]
fn max_extraction_is_reverse_sorted() {
    for seed in SEEDS.iter() {
        let mut rng = StdRng::seed_from_u64(*seed);
        let len = rng.gen_range(0..500);
        let input = random_vec(&mut rng, len, 100);
        let mut heap = MinMaxHeap::new();
        for value in input.iter() {
            heap.push(*value);
        }
        let mut out = Vec::new();
        while let Some(value) = heap.pop_max() {
            out.push(value);
        }
        let mut expected = input;
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(out, expected);
    }
}

#[test]
fn interleaved_pops_consume_everything_once() {
    for seed in SEEDS.iter() {
        let mut rng = StdRng::seed_from_u64(*seed);
        let input = random_vec(&mut rng, 301, 40);
        let mut heap = MinMaxHeap::from(input.clone());
        let mut out = Vec::new();
        while !heap.is_empty() {
            if rng.gen::<bool>() {
                let min = heap.remove_min().unwrap();
                if let Ok(max) = heap.max() {
                    assert!(min <= *max);
                }
                out.push(min);
            } else {
                let max = heap.remove_max().unwrap();
                if let Ok(min) = heap.min() {
                    assert!(*min <= max);
                }
                out.push(max);
            }
        }
        let mut expected = input;
        expected.sort();
        out.sort();
        assert_eq!(out, expected);
    }
}

#[test]
fn alternating_pops_round_trip_to_sorted() {
    for seed in SEEDS.iter() {
        let mut rng = StdRng::seed_from_u64(*seed);
        let len = rng.gen_range(1..400);
        let input = random_vec(&mut rng, len, 1000);
        let mut heap = MinMaxHeap::from(input.clone());
        let mut mins = Vec::new();
        let mut maxs = Vec::new();
        loop {
            match heap.pop_max() {
                Some(value) => maxs.push(value),
                None => break,
            }
            match heap.pop_min() {
                Some(value) => mins.push(value),
                None => break,
            }
        }
        maxs.reverse();
        mins.extend(maxs);
        let mut expected = input;
        expected.sort();
        assert_eq!(mins, expected);
    }
}

#[test]
fn push_pop_matches_separate_calls() {
    let mut rng = StdRng::seed_from_u64(99);
    let start = random_vec(&mut rng, 64, 30);
    let mut fused = MinMaxHeap::from(start.clone());
    let mut split = MinMaxHeap::from(start);
    for _ in 0..500 {
        let value = rng.gen_range(-30..30);
        if rng.gen_bool(0.5) {
            split.push(value);
            assert_eq!(Some(fused.push_pop_min(value)), split.pop_min());
        } else {
            split.push(value);
            assert_eq!(Some(fused.push_pop_max(value)), split.pop_max());
        }
        fused.check();
        assert_eq!(fused.len(), split.len());
        assert_eq!(fused.peek_min(), split.peek_min());
        assert_eq!(fused.peek_max(), split.peek_max());
    }
}

#[test]
fn build_matches_repeated_push() {
    for len in 0..130 {
        let mut rng = StdRng::seed_from_u64(len as u64);
        let input = random_vec(&mut rng, len, 20);
        let built = MinMaxHeap::from(input.clone());
        built.check();
        let mut pushed = MinMaxHeap::new();
        pushed.extend(input);
        pushed.check();
        assert_eq!(built.into_sorted_vec(), pushed.into_sorted_vec());
    }
}
