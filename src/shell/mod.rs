use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::cli::{Command, ShellLine};
use crate::commands::{self, Settings};
use crate::core::diagnostics::print_error;

/// Line-oriented menu over the five exercises. Errors end the request, not the session.
pub fn start(settings: &Settings) -> anyhow::Result<()> {
    banner();
    print_menu();

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    loop {
        print!("{} ", "discreta ›".bold().truecolor(130, 0, 200));
        io::stdout().flush().ok();

        let mut line = String::new();
        if lines.read_line(&mut line)? == 0 {
            println!();
            break;
        }
        match handle_line(line.trim(), settings) {
            Flow::Continue => {}
            Flow::Exit => break,
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn handle_line(line: &str, settings: &Settings) -> Flow {
    let parts = shell_words(line);
    let Some(first) = parts.first() else {
        return Flow::Continue;
    };
    match first.as_str() {
        "exit" | "quit" => return Flow::Exit,
        "help" | "?" => {
            print_help();
            return Flow::Continue;
        }
        "menu" | "ls" => {
            print_menu();
            return Flow::Continue;
        }
        _ => {}
    }
    match ShellLine::try_parse_from(&parts) {
        Ok(ShellLine { cmd: Command::Shell }) => {
            println!("{}", "already in the shell".dimmed());
        }
        Ok(ShellLine { cmd }) => {
            if let Err(e) = commands::dispatch(cmd, settings) {
                print_error(&format!("{:#}", e));
            }
        }
        // clap renders its own usage / help text
        Err(e) => {
            let _ = e.print();
        }
    }
    Flow::Continue
}

fn banner() {
    println!(
        "\n{}\n{}\n{}",
        "╔══════════════════════════════════════════════════╗".truecolor(225, 0, 180),
        "║           D i s c r e t e   M a t h              ║"
            .truecolor(255, 240, 0)
            .bold(),
        "╚══════════════════════════════════════════════════╝".truecolor(225, 0, 180),
    );
}

fn print_menu() {
    println!(
        "{}\n  1. primes N [--list] [--log]        # prime numbers up to N\n  2. perfect N [--list] [--log]       # perfect numbers up to N\n  3. triples N                        # Pythagorean triples up to N\n  4. cipher -d D -c \"a, b, ..\" MSG    # polynomial cipher (cipher --examples)\n  5. divisors A B                     # divisors, GCD and LCM\n",
        "Questions:".truecolor(130, 0, 200),
    );
}

fn print_help() {
    print_menu();
    println!(
        "{}\n  menu                # list the questions again\n  help                # show this help\n  exit                # quit shell\n\n  add --help to any question for its options",
        "Shell:".truecolor(130, 0, 200),
    );
}

/// Splits a shell line on whitespace. Text inside `"..."` or `'...'` stays one
/// word, so messages and coefficient lists can contain spaces and commas.
/// An unterminated quote runs to the end of the line.
pub fn shell_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current: Option<String> = None;
    let mut quote: Option<char> = None;
    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.get_or_insert_with(String::new).push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                current.get_or_insert_with(String::new);
            }
            None if c.is_whitespace() => words.extend(current.take()),
            None => current.get_or_insert_with(String::new).push(c),
        }
    }
    words.extend(current);
    words
}
