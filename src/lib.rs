//! Discrete-math exercises: pure computation in `core`, the command-line
//! surface in `cli` / `commands` / `shell`.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod shell;

pub use crate::core::cipher::{decode, detect_collisions, encode, validate_key, PolynomialKey};
pub use crate::core::ExerciseError;
