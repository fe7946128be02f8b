//! tests/render_snapshots.rs
//! Inline snapshots of the plain-text output panels.

use discreta::commands;
use discreta::core::{cipher, divisors, primes, triples};

fn plain() {
    colored::control::set_override(false);
}

#[test]
fn cipher_linear_panel() {
    plain();
    let r = cipher::run("Hi!", 1, &[3, 7]).unwrap();
    insta::assert_snapshot!(commands::cipher::render(&r).trim_end(), @r###"
Polynomial cipher: degree 1, coefficients [3, 7]
Original: Hi!
Encoded: @D*
Decoded: Hi!
"###);
}

#[test]
fn cipher_collision_warning() {
    plain();
    let r = cipher::run("Hi", 2, &[1, 0, 0]).unwrap();
    insta::assert_snapshot!(commands::cipher::render(&r).trim_end(), @r###"
Polynomial cipher: degree 2, coefficients [1, 0, 0]
Original: Hi
Encoded: p)
Decoded: H#
warn: the polynomial produces 65 collisions; decoding may not recover every original character
"###);
}

#[test]
fn primes_panel_with_list_and_log() {
    plain();
    let r = primes::primes_up_to(10).unwrap();
    insta::assert_snapshot!(commands::primes::render(&r, true, true).trim_end(), @r###"
Primes from 2 to 10
Total primes found: 4
Primes: 2, 3, 5, 7
Log: checking numbers from 2 to 10
  P(2) = 1
  P(3) = 1
  P(4) = 0
  P(5) = 1
  P(6) = 0
  P(7) = 1
  P(8) = 0
  P(9) = 0
  P(10) = 0
"###);
}

#[test]
fn triples_table() {
    plain();
    let r = triples::pythagorean_triples(13, 300).unwrap();
    insta::assert_snapshot!(commands::triples::render(&r).trim_end(), @r###"
Pythagorean triples with sides up to 13
Triples found: 3
     a      b      c
     3      4      5
     5     12     13
     6      8     10
"###);
}

#[test]
fn divisor_panels() {
    plain();
    let r = divisors::analyze(12, 18).unwrap();
    insta::assert_snapshot!(commands::divisors::render(&r).trim_end(), @r###"
Number A: 12
  Divisors: 1, 2, 3, 4, 6, 12
  Number of divisors: 6
  Sum of divisors: 28
  Prime factors: 2 × 2 × 3
Number B: 18
  Divisors: 1, 2, 3, 6, 9, 18
  Number of divisors: 6
  Sum of divisors: 39
  Prime factors: 2 × 3 × 3
GCD(12, 18): 6
LCM(12, 18): 36
"###);
}
