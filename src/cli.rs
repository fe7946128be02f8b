use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "discreta",
    about = "Discrete-math exercises: primes, perfect numbers, Pythagorean triples, polynomial cipher, divisors",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct DiscretaCli {
    /// Global: path to config (TOML); default: ~/.discreta/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: print the report as JSON instead of text
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    /// Global: also write the JSON report to FILE
    #[arg(long = "out", value_name = "FILE", global = true)]
    pub out: Option<PathBuf>,

    /// Global: log more (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Global: disable coloured output
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Question 1: find the primes in 2..=N
    Primes {
        #[arg(value_name = "N")]
        n: u64,
        /// Show the list of primes
        #[arg(long = "list", action = ArgAction::SetTrue)]
        list: bool,
        /// Show the calculation log (P(i) = 1|0)
        #[arg(long = "log", action = ArgAction::SetTrue)]
        log: bool,
    },

    /// Question 2: find the perfect numbers in 2..=N
    Perfect {
        #[arg(value_name = "N")]
        n: u64,
        /// Show the list of perfect numbers
        #[arg(long = "list", action = ArgAction::SetTrue)]
        list: bool,
        /// Show the calculation log
        #[arg(long = "log", action = ArgAction::SetTrue)]
        log: bool,
    },

    /// Question 3: Pythagorean triples with every side <= N
    Triples {
        #[arg(value_name = "N")]
        n: u64,
    },

    /// Question 4: polynomial cipher over printable ASCII (mod 95)
    ///
    /// Examples:
    ///   discreta cipher --degree 1 --coeffs "3, 7" "Hello"
    ///   discreta cipher -d 2 -c "7, 5, 3" "Hello"
    ///   discreta cipher --examples
    Cipher {
        /// Message to encode and decode back
        #[arg(value_name = "MESSAGE", required_unless_present = "examples")]
        message: Option<String>,
        /// Polynomial degree (1, 2 or 3)
        #[arg(short = 'd', long = "degree", value_name = "D", default_value_t = 1)]
        degree: u8,
        /// Coefficients, highest power first: "a, b[, c[, d]]"
        #[arg(
            short = 'c',
            long = "coeffs",
            value_name = "LIST",
            allow_hyphen_values = true,
            required_unless_present = "examples"
        )]
        coeffs: Option<String>,
        /// List example keys per degree
        #[arg(long = "examples", action = ArgAction::SetTrue)]
        examples: bool,
    },

    /// Question 5: divisors, prime factors, GCD and LCM of A and B
    Divisors {
        #[arg(value_name = "A")]
        a: u64,
        #[arg(value_name = "B")]
        b: u64,
    },

    /// Interactive shell (default when no subcommand is given)
    Shell,
}

/// One line typed into the shell: the same subcommands, no binary name.
#[derive(Debug, Parser)]
#[command(
    name = "discreta",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub cmd: Command,
}
