pub mod cipher;
pub mod divisors;
pub mod perfect;
pub mod primes;
pub mod triples;

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::cli::{Command, DiscretaCli};
use crate::config::{Config, Limits};
use crate::io::atomic::write_json;

/// Per-invocation output settings, merged from flags and the config file.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub json: bool,
    pub out: Option<PathBuf>,
    pub limits: Limits,
}

impl Settings {
    pub fn new(args: &DiscretaCli, cfg: &Config) -> Self {
        Self {
            json: args.json || cfg.output.json,
            out: args.out.clone(),
            limits: cfg.limits,
        }
    }
}

/// Writes `--out` if requested, then prints JSON or the rendered text.
pub fn emit<T: Serialize>(
    report: &T,
    settings: &Settings,
    render: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if let Some(path) = &settings.out {
        write_json(path, report)?;
        info!(path = %path.display(), "report written");
    }
    if settings.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render(report));
    }
    Ok(())
}

pub fn dispatch(cmd: Command, settings: &Settings) -> anyhow::Result<()> {
    match cmd {
        Command::Primes { n, list, log } => primes::main(n, list, log, settings),
        Command::Perfect { n, list, log } => perfect::main(n, list, log, settings),
        Command::Triples { n } => triples::main(n, settings),
        Command::Cipher { message, degree, coeffs, examples } => {
            if examples {
                return cipher::examples(settings);
            }
            cipher::main(message.unwrap_or_default(), degree, coeffs.unwrap_or_default(), settings)
        }
        Command::Divisors { a, b } => divisors::main(a, b, settings),
        Command::Shell => anyhow::bail!("already inside the shell"),
    }
}
