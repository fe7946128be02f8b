use serde::Serialize;

use crate::core::error::{require_at_least, ExerciseError};
use crate::core::number::is_prime;

#[derive(Debug, Clone, Serialize)]
pub struct PrimeReport {
    pub limit: u64,
    pub primes: Vec<u64>,
    /// One `P(i) = 1|0` line per checked number.
    pub log: Vec<String>,
}

impl PrimeReport {
    pub fn count(&self) -> usize {
        self.primes.len()
    }
}

/// Checks every integer in `2..=n`.
pub fn primes_up_to(n: u64) -> Result<PrimeReport, ExerciseError> {
    require_at_least("N", 2, n)?;
    let mut primes = Vec::new();
    let mut log = Vec::with_capacity(n.saturating_sub(1).min(1 << 20) as usize);
    for i in 2..=n {
        let p = is_prime(i);
        log.push(format!("P({}) = {}", i, p as u8));
        if p {
            primes.push(i);
        }
    }
    Ok(PrimeReport { limit: n, primes, log })
}
