use std::fmt::Write;

use anyhow::Context;

use super::{emit, Settings};
use crate::core::diagnostics::{field, heading};
use crate::core::divisors::{analyze, Analysis, DivisorReport};

fn join<T: ToString>(xs: &[T], sep: &str) -> String {
    xs.iter().map(T::to_string).collect::<Vec<_>>().join(sep)
}

fn render_one(out: &mut String, title: &str, a: &Analysis) {
    let _ = writeln!(out, "{}", heading(&format!("{}: {}", title, a.number)));
    let _ = writeln!(out, "  {}", field("Divisors", join(&a.divisors, ", ")));
    let _ = writeln!(out, "  {}", field("Number of divisors", a.divisors.len()));
    let _ = writeln!(out, "  {}", field("Sum of divisors", a.divisor_sum));
    let factors = if a.prime_factors.is_empty() {
        "none".to_string()
    } else {
        join(&a.prime_factors, " × ")
    };
    let _ = writeln!(out, "  {}", field("Prime factors", factors));
}

pub fn render(report: &DivisorReport) -> String {
    let mut out = String::new();
    render_one(&mut out, "Number A", &report.a);
    render_one(&mut out, "Number B", &report.b);
    let (a, b) = (report.a.number, report.b.number);
    let _ = writeln!(out, "{}", field(&format!("GCD({}, {})", a, b), report.gcd));
    let _ = writeln!(out, "{}", field(&format!("LCM({}, {})", a, b), report.lcm));
    out
}

pub fn main(a: u64, b: u64, settings: &Settings) -> anyhow::Result<()> {
    let report = analyze(a, b).with_context(|| format!("divisor analysis of {} and {}", a, b))?;
    emit(&report, settings, render)
}
