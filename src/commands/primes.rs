use std::fmt::Write;

use anyhow::Context;
use tracing::debug;

use super::{emit, Settings};
use crate::core::diagnostics::{field, heading};
use crate::core::primes::{primes_up_to, PrimeReport};

pub fn render(report: &PrimeReport, list: bool, log: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(&format!("Primes from 2 to {}", report.limit)));
    let _ = writeln!(out, "{}", field("Total primes found", report.count()));
    if list && report.count() > 0 {
        let joined: Vec<String> = report.primes.iter().map(u64::to_string).collect();
        let _ = writeln!(out, "{}", field("Primes", joined.join(", ")));
    }
    if log {
        let _ = writeln!(out, "{}", field("Log", format!("checking numbers from 2 to {}", report.limit)));
        for line in &report.log {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out
}

pub fn main(n: u64, list: bool, log: bool, settings: &Settings) -> anyhow::Result<()> {
    let report = primes_up_to(n).with_context(|| format!("primes up to {}", n))?;
    debug!(n, count = report.count(), "primes done");
    emit(&report, settings, |r| render(r, list, log))
}
