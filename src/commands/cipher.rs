use std::fmt::Write;

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use super::{emit, Settings};
use crate::core::cipher::{parse_coefficients, run, CipherReport, EXAMPLE_KEYS};
use crate::core::diagnostics::{field, heading, warning_line};

pub fn render(report: &CipherReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        heading(&format!(
            "Polynomial cipher: degree {}, coefficients {:?}",
            report.degree, report.coefficients
        ))
    );
    let _ = writeln!(out, "{}", field("Original", &report.original));
    let _ = writeln!(out, "{}", field("Encoded", &report.encoded));
    let _ = writeln!(out, "{}", field("Decoded", &report.decoded));
    if report.collisions > 0 {
        let _ = writeln!(
            out,
            "{}",
            warning_line(&format!(
                "the polynomial produces {} collisions; decoding may not recover every original character",
                report.collisions
            ))
        );
    }
    out
}

/// Ready-made keys for one degree, as printed by `cipher --examples`.
#[derive(Debug, Clone, Serialize)]
pub struct ExampleKeys {
    pub degree: u8,
    pub keys: Vec<&'static str>,
}

pub fn example_keys() -> Vec<ExampleKeys> {
    EXAMPLE_KEYS
        .iter()
        .map(|(degree, keys)| ExampleKeys { degree: *degree, keys: keys.to_vec() })
        .collect()
}

pub fn render_examples(examples: &[ExampleKeys]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading("Example coefficients (highest power first)"));
    for e in examples {
        let _ = writeln!(out, "{}", field(&format!("Degree {}", e.degree), e.keys.join("  |  ")));
    }
    out
}

pub fn examples(settings: &Settings) -> anyhow::Result<()> {
    emit(&example_keys(), settings, |keys| render_examples(keys))
}

pub fn main(message: String, degree: u8, coeffs: String, settings: &Settings) -> anyhow::Result<()> {
    let coefficients = parse_coefficients(&coeffs).context("cipher key")?;
    let report = run(&message, degree, &coefficients).context("cipher")?;
    if report.collisions > 0 {
        info!(collisions = report.collisions, "key is not a permutation of the alphabet");
    }
    emit(&report, settings, render)
}
