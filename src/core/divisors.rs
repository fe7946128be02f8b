use serde::Serialize;

use crate::core::error::{require_at_least, ExerciseError};
use crate::core::number::{gcd, lcm, square_fits};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub number: u64,
    pub divisors: Vec<u64>,
    pub divisor_sum: u128,
    pub prime_factors: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DivisorReport {
    pub a: Analysis,
    pub b: Analysis,
    pub gcd: u64,
    pub lcm: u128,
}

/// Every divisor of `n` in ascending order.
pub fn divisors(n: u64) -> Vec<u64> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i = 1u64;
    while square_fits(i, n) {
        if n % i == 0 {
            low.push(i);
            if i != n / i {
                high.push(n / i);
            }
        }
        i += 1;
    }
    low.extend(high.into_iter().rev());
    low
}

/// Prime factorisation with multiplicity, ascending. Empty for 0 and 1.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut out = Vec::new();
    if n < 2 {
        return out;
    }
    let mut d = 2u64;
    while square_fits(d, n) {
        while n % d == 0 {
            out.push(d);
            n /= d;
        }
        d += 1;
    }
    if n > 1 {
        out.push(n);
    }
    out
}

pub fn analyze_one(n: u64) -> Analysis {
    let divisors = divisors(n);
    Analysis {
        number: n,
        divisor_sum: divisors.iter().map(|&d| d as u128).sum(),
        divisors,
        prime_factors: prime_factors(n),
    }
}

pub fn analyze(a: u64, b: u64) -> Result<DivisorReport, ExerciseError> {
    require_at_least("A", 1, a)?;
    require_at_least("B", 1, b)?;
    Ok(DivisorReport { a: analyze_one(a), b: analyze_one(b), gcd: gcd(a, b), lcm: lcm(a, b) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisors_are_sorted_and_unique() {
        assert_eq!(divisors(1), vec![1]);
        assert_eq!(divisors(36), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
        assert_eq!(divisors(13), vec![1, 13]);
    }

    #[test]
    fn factorisation() {
        assert_eq!(prime_factors(1), Vec::<u64>::new());
        assert_eq!(prime_factors(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factors(97), vec![97]);
    }

    #[test]
    fn twelve_and_eighteen() {
        let r = analyze(12, 18).unwrap();
        assert_eq!(r.gcd, 6);
        assert_eq!(r.lcm, 36);
        assert_eq!(r.a.divisors, vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(r.a.divisor_sum, 28);
        assert_eq!(r.b.prime_factors, vec![2, 3, 3]);
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(analyze(0, 5).unwrap_err(), ExerciseError::bound("A", 1, 0));
        assert_eq!(analyze(5, 0).unwrap_err(), ExerciseError::bound("B", 1, 0));
    }
}
