//! Perfect numbers: computed by divisor sums up to a live limit, read from
//! the table of known perfect numbers above it.

use serde::Serialize;

use crate::core::error::{require_at_least, ExerciseError};
use crate::core::number::square_fits;

/// Default bound for live computation.
pub const DEFAULT_LIVE_LIMIT: u64 = 20_000;

/// The first ten perfect numbers. Kept as text because the larger ones do
/// not fit any machine integer.
pub const KNOWN_PERFECTS: [&str; 10] = [
    "6",
    "28",
    "496",
    "8128",
    "33550336",
    "8589869056",
    "137438691328",
    "2305843008139952128",
    "2658455991569831744654692615953842176",
    "191561942608236107294793378084303638130997321548169216",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerfectSource {
    Computed,
    KnownTable,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerfectReport {
    pub limit: u64,
    pub source: PerfectSource,
    pub perfects: Vec<String>,
    pub log: Vec<String>,
}

impl PerfectReport {
    pub fn count(&self) -> usize {
        self.perfects.len()
    }
}

/// Sum of proper divisors equals `n`. Stops as soon as the sum passes `n`.
pub fn is_perfect(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let target = n as u128;
    let mut sum = 1u128;
    let mut i = 2u64;
    while square_fits(i, n) {
        if n % i == 0 {
            sum += i as u128;
            if i != n / i {
                sum += (n / i) as u128;
            }
            if sum > target {
                return false;
            }
        }
        i += 1;
    }
    sum == target
}

pub fn perfect_up_to(n: u64, live_limit: u64) -> Result<PerfectReport, ExerciseError> {
    require_at_least("N", 2, n)?;
    if n > live_limit {
        // anything that does not parse as u64 is larger than n
        let perfects = KNOWN_PERFECTS
            .iter()
            .filter(|p| p.parse::<u64>().map_or(false, |v| v <= n))
            .map(|p| p.to_string())
            .collect();
        let note = format!(
            "For N > {}, the result comes from the list of known perfect numbers.",
            live_limit
        );
        return Ok(PerfectReport {
            limit: n,
            source: PerfectSource::KnownTable,
            perfects,
            log: vec![note],
        });
    }

    let mut perfects = Vec::new();
    let mut log = Vec::new();
    for i in 2..=n {
        if is_perfect(i) {
            log.push(format!("{} is perfect", i));
            perfects.push(i.to_string());
        } else {
            log.push(format!("{} is not perfect", i));
        }
    }
    Ok(PerfectReport { limit: n, source: PerfectSource::Computed, perfects, log })
}
