use std::fmt::Write;

use anyhow::Context;
use tracing::debug;

use super::{emit, Settings};
use crate::core::diagnostics::{field, heading};
use crate::core::perfect::{perfect_up_to, PerfectReport};

pub fn render(report: &PerfectReport, list: bool, log: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(&format!("Perfect numbers from 2 to {}", report.limit)));
    let _ = writeln!(out, "{}", field("Perfect numbers found", report.count()));
    if list {
        for (i, p) in report.perfects.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, p);
        }
    }
    if log {
        for line in &report.log {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out
}

pub fn main(n: u64, list: bool, log: bool, settings: &Settings) -> anyhow::Result<()> {
    let live = settings.limits.perfect_live;
    let report = perfect_up_to(n, live).with_context(|| format!("perfect numbers up to {}", n))?;
    debug!(n, live, source = ?report.source, count = report.count(), "perfect numbers done");
    emit(&report, settings, |r| render(r, list, log))
}
