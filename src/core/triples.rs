use serde::Serialize;

use crate::core::error::{require_at_least, ExerciseError};
use crate::core::number::isqrt;

/// Default cap on `N`; the search is quadratic in it.
pub const DEFAULT_MAX_BOUND: u64 = 300;

/// Largest `N` for which `a² + b²` stays inside `u64` (`2·N² <= u64::MAX`),
/// whatever the configured cap says.
pub const ARITHMETIC_BOUND: u64 = 3_037_000_499;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Triple {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripleReport {
    pub limit: u64,
    pub triples: Vec<Triple>,
}

/// All `a < b < c <= n` with `a² + b² = c²`, ordered by `a` then `b`.
pub fn pythagorean_triples(n: u64, max_bound: u64) -> Result<TripleReport, ExerciseError> {
    require_at_least("N", 1, n)?;
    let cap = max_bound.min(ARITHMETIC_BOUND);
    if n > cap {
        return Err(ExerciseError::LimitExceeded { name: "N", max: cap, got: n });
    }
    let mut triples = Vec::new();
    for a in 1..=n {
        for b in a + 1..=n {
            let sum = a * a + b * b;
            let c = isqrt(sum);
            if c * c == sum && c <= n {
                triples.push(Triple { a, b, c });
            }
        }
    }
    Ok(TripleReport { limit: n, triples })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(a: u64, b: u64, c: u64) -> Triple {
        Triple { a, b, c }
    }

    #[test]
    fn triples_up_to_twenty() {
        let r = pythagorean_triples(20, DEFAULT_MAX_BOUND).unwrap();
        assert_eq!(
            r.triples,
            vec![t(3, 4, 5), t(5, 12, 13), t(6, 8, 10), t(8, 15, 17), t(9, 12, 15), t(12, 16, 20)]
        );
    }

    #[test]
    fn hypotenuse_is_bounded() {
        // 15-20-25 has legs under 24 but c = 25
        let r = pythagorean_triples(24, DEFAULT_MAX_BOUND).unwrap();
        assert!(!r.triples.contains(&t(15, 20, 25)));
        assert!(pythagorean_triples(25, DEFAULT_MAX_BOUND).unwrap().triples.contains(&t(15, 20, 25)));
    }

    #[test]
    fn bounds_are_enforced() {
        assert_eq!(pythagorean_triples(4, 300).unwrap().triples, vec![]);
        assert!(matches!(pythagorean_triples(0, 300), Err(ExerciseError::InvalidBound { .. })));
        assert_eq!(
            pythagorean_triples(301, 300).unwrap_err(),
            ExerciseError::LimitExceeded { name: "N", max: 300, got: 301 }
        );
    }

    #[test]
    fn huge_configured_cap_is_clamped() {
        assert_eq!(
            pythagorean_triples(u64::MAX, u64::MAX).unwrap_err(),
            ExerciseError::LimitExceeded { name: "N", max: ARITHMETIC_BOUND, got: u64::MAX }
        );
        assert!(ARITHMETIC_BOUND
            .checked_mul(ARITHMETIC_BOUND)
            .and_then(|sq| sq.checked_mul(2))
            .is_some());
        assert!((ARITHMETIC_BOUND + 1)
            .checked_mul(ARITHMETIC_BOUND + 1)
            .and_then(|sq| sq.checked_mul(2))
            .is_none());
    }
}
