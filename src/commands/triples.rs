use std::fmt::Write;

use anyhow::Context;

use super::{emit, Settings};
use crate::core::diagnostics::{field, heading};
use crate::core::triples::{pythagorean_triples, TripleReport};

pub fn render(report: &TripleReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(&format!("Pythagorean triples with sides up to {}", report.limit)));
    let _ = writeln!(out, "{}", field("Triples found", report.triples.len()));
    if !report.triples.is_empty() {
        let _ = writeln!(out, "{:>6} {:>6} {:>6}", "a", "b", "c");
        for t in &report.triples {
            let _ = writeln!(out, "{:>6} {:>6} {:>6}", t.a, t.b, t.c);
        }
    }
    out
}

pub fn main(n: u64, settings: &Settings) -> anyhow::Result<()> {
    let report = pythagorean_triples(n, settings.limits.triples)
        .with_context(|| format!("triples up to {}", n))?;
    emit(&report, settings, render)
}
