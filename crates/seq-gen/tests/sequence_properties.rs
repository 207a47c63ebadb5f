//! Property tests for the generator against the sequence invariants and a
//! brute-force oracle.

use seq_core::{PropertyChecker, SequencePropertyChecker};
use seq_gen::{generate, generate_terms, SequenceGenerator};
use seq_testkit::{get_or_generate_seed, DeterministicRng};

/// Recompute every run-sum from scratch at each step.
fn brute_force(count: usize) -> Vec<u64> {
    let mut terms: Vec<u64> = [1, 2].into_iter().take(count).collect();
    while terms.len() < count {
        let last = *terms.last().unwrap();
        let mut best: Option<u64> = None;
        for start in 0..terms.len() {
            let mut sum = terms[start];
            for &t in &terms[start + 1..] {
                sum += t;
                if sum > last && best.map_or(true, |b| sum < b) {
                    best = Some(sum);
                }
            }
        }
        terms.push(best.unwrap());
    }
    terms
}

#[test]
fn test_matches_brute_force() {
    let terms = generate_terms(300).unwrap();
    assert_eq!(terms, brute_force(300));
}

#[test]
fn test_known_oeis_prefix() {
    let expected: Vec<u64> = vec![
        1, 2, 3, 5, 6, 8, 10, 11, 14, 16, 17, 18, 19, 21, 22, 24, 25, 29, 30, 32, 33, 34, 35, 37,
        40, 41, 43, 45, 46, 47,
    ];
    assert_eq!(generate(30).unwrap(), expected);
}

#[test]
fn test_landmark_terms() {
    let terms = generate_terms(2000).unwrap();
    assert_eq!(terms[99], 146);
    assert_eq!(terms[999], 1149);
    assert_eq!(terms[1999], 2189);
}

#[test]
fn test_all_properties_hold() {
    let terms = generate_terms(3000).unwrap();
    let summary = SequencePropertyChecker::new(&terms).summary();
    assert!(summary.is_clean(), "{}", summary.format_report());
}

#[test]
fn test_prefix_consistency_random_sizes() {
    let mut rng = DeterministicRng::new(get_or_generate_seed());

    for _ in 0..10 {
        let (n, m) = rng.prefix_pair(1500);
        let short = generate_terms(n).unwrap();
        let long = generate_terms(m).unwrap();
        assert_eq!(short.as_slice(), &long[..n], "SEQ_SEED={} n={} m={}", rng.seed(), n, m);
    }
}

#[test]
fn test_iterator_agrees_with_generate() {
    let lazy: Vec<u64> = SequenceGenerator::new()
        .take(250)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lazy, generate(250).unwrap());
}

#[test]
fn test_negative_inputs_rejected() {
    let mut rng = DeterministicRng::new(get_or_generate_seed());

    for _ in 0..10 {
        let n = rng.gen_range(i64::MIN..0);
        let err = generate(n).unwrap_err();
        assert!(err.is_invalid_argument(), "SEQ_SEED={} n={}", rng.seed(), n);
    }
}
