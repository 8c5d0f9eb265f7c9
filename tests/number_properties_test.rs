use number_classifier::core::classifier::{classify_number, validate};
use number_classifier::core::number::{digit_sum, is_armstrong, is_perfect, is_prime};
use number_classifier::core::ClassificationError;

const LIMIT: usize = 10_000;

fn sieve(limit: usize) -> Vec<bool> {
    let mut primes = vec![true; limit + 1];
    primes[0] = false;
    primes[1] = false;
    let mut i = 2;
    while i * i <= limit {
        if primes[i] {
            let mut multiple = i * i;
            while multiple <= limit {
                primes[multiple] = false;
                multiple += i;
            }
        }
        i += 1;
    }
    primes
}

fn proper_divisor_sum(n: i64) -> i64 {
    (1..n).filter(|d| n % d == 0).sum()
}

#[test]
fn test_is_prime_matches_sieve() {
    let primes = sieve(LIMIT);
    for n in 0..=LIMIT {
        assert_eq!(is_prime(n as i64), primes[n], "disagreement at {}", n);
    }
}

#[test]
fn test_is_perfect_matches_divisor_sum() {
    let perfect: Vec<i64> = (2..=LIMIT as i64).filter(|&n| is_perfect(n)).collect();
    assert_eq!(perfect, vec![6, 28, 496, 8128]);

    for n in (2..=2_000).chain([8128]) {
        assert_eq!(is_perfect(n), proper_divisor_sum(n) == n, "disagreement at {}", n);
    }
}

#[test]
fn test_armstrong_numbers_below_limit() {
    let armstrong: Vec<i64> = (0..LIMIT as i64).filter(|&n| is_armstrong(n)).collect();
    assert_eq!(
        armstrong,
        vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 153, 370, 371, 407, 1634, 8208, 9474]
    );
}

#[test]
fn test_digit_sum_examples() {
    assert_eq!(digit_sum(12345), 15);
    assert_eq!(digit_sum(0), 0);
    assert_eq!(digit_sum(-12345), 15);
}

#[test]
fn test_zero_and_one_are_neither_prime_nor_perfect() {
    for n in [0, 1] {
        let classification = classify_number(n);
        assert!(!classification.is_prime);
        assert!(!classification.is_perfect);
    }
}

#[test]
fn test_validate_reason_codes() {
    assert_eq!(validate(""), Err(ClassificationError::Missing));
    assert_eq!(validate("abc"), Err(ClassificationError::Alphabetic));
    assert_eq!(validate("12a"), Err(ClassificationError::Invalid));
    assert_eq!(validate("371"), Ok(371));
}
