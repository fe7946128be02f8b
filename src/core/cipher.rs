//! Polynomial substitution cipher over the 95 printable ASCII characters.
//!
//! - `validate_key(degree, coeffs)` → checked `PolynomialKey`
//! - `encode(msg, &key)` → apply `x ↦ p(x) mod 95` to every printable char
//! - `decode(msg, &key)` → modular inverse (degree 1) or first-pre-image table (degree 2/3)
//! - `detect_collisions(&key)` → how many alphabet values share an image
//!
//! Characters outside `' '..='~'` are copied through untouched in both directions.

use serde::Serialize;
use tracing::debug;

use crate::core::error::ExerciseError;
use crate::core::number::modulo;

/// First printable character (' ').
pub const ASCII_MIN: u32 = 32;
/// Alphabet size, `' '..='~'`.
pub const MODULUS: i64 = 95;

const ALPHABET_LEN: usize = MODULUS as usize;

/// Ready-made keys per degree, as typed on the command line.
pub const EXAMPLE_KEYS: &[(u8, &[&str])] = &[
    (1, &["3, 7"]),
    (2, &["1, 0, 0", "7, 5, 3"]),
    (3, &["1, 0, 0, 0", "5, 2, 9, 13"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    Linear,
    Quadratic,
    Cubic,
}

impl Degree {
    pub fn as_u8(self) -> u8 {
        match self {
            Degree::Linear => 1,
            Degree::Quadratic => 2,
            Degree::Cubic => 3,
        }
    }

    pub fn coefficient_count(self) -> usize {
        self.as_u8() as usize + 1
    }
}

impl TryFrom<u8> for Degree {
    type Error = ExerciseError;

    fn try_from(d: u8) -> Result<Self, Self::Error> {
        match d {
            1 => Ok(Degree::Linear),
            2 => Ok(Degree::Quadratic),
            3 => Ok(Degree::Cubic),
            other => Err(ExerciseError::UnsupportedDegree(other)),
        }
    }
}

/// A validated key: `degree + 1` coefficients, highest power first, leading one non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialKey {
    degree: Degree,
    coefficients: Vec<i64>,
}

impl PolynomialKey {
    pub fn degree(&self) -> Degree {
        self.degree
    }

    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    pub fn leading(&self) -> i64 {
        self.coefficients[0]
    }

    /// Forward map on alphabet indices. Horner form with every step reduced
    /// mod 95, so large coefficients cannot overflow.
    pub fn image(&self, x: u8) -> u8 {
        let x = x as i64;
        let y = self
            .coefficients
            .iter()
            .fold(0i64, |acc, &c| modulo(acc * x + modulo(c, MODULUS), MODULUS));
        y as u8
    }
}

pub fn validate_key(degree: u8, coefficients: &[i64]) -> Result<PolynomialKey, ExerciseError> {
    let deg = Degree::try_from(degree)?;
    let expected = deg.coefficient_count();
    if coefficients.len() != expected {
        return Err(ExerciseError::InvalidCoefficientCount {
            degree,
            expected,
            found: coefficients.len(),
        });
    }
    if coefficients[0] == 0 {
        return Err(ExerciseError::ZeroLeadingCoefficient);
    }
    Ok(PolynomialKey { degree: deg, coefficients: coefficients.to_vec() })
}

/// Parses `"a, b, c"` into integers.
pub fn parse_coefficients(text: &str) -> Result<Vec<i64>, ExerciseError> {
    if text.trim().is_empty() {
        return Err(ExerciseError::EmptyInput("coefficients"));
    }
    text.split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.parse::<i64>()
                .map_err(|_| ExerciseError::InvalidCoefficient(tok.to_string()))
        })
        .collect()
}

fn alphabet_index(c: char) -> Option<u8> {
    let code = c as u32;
    if (ASCII_MIN..ASCII_MIN + MODULUS as u32).contains(&code) {
        Some((code - ASCII_MIN) as u8)
    } else {
        None
    }
}

fn alphabet_char(i: u8) -> char {
    char::from(i + ASCII_MIN as u8)
}

pub fn encode(message: &str, key: &PolynomialKey) -> String {
    message
        .chars()
        .map(|c| match alphabet_index(c) {
            Some(x) => alphabet_char(key.image(x)),
            None => c,
        })
        .collect()
}

/// Smallest `x` in `1..95` with `a*x ≡ 1 (mod 95)`.
pub fn modular_inverse(a: i64) -> Option<i64> {
    let a = modulo(a, MODULUS);
    (1..MODULUS).find(|&x| (a * x) % MODULUS == 1)
}

/// Image → first (smallest) alphabet index producing it.
#[derive(Debug, Clone)]
pub struct InverseTable {
    slots: [Option<u8>; ALPHABET_LEN],
}

impl InverseTable {
    pub fn build(key: &PolynomialKey) -> Self {
        let mut slots = [None; ALPHABET_LEN];
        for i in 0..ALPHABET_LEN as u8 {
            let slot = &mut slots[key.image(i) as usize];
            if slot.is_none() {
                *slot = Some(i);
            }
        }
        Self { slots }
    }

    pub fn lookup(&self, y: u8) -> Option<u8> {
        self.slots.get(y as usize).copied().flatten()
    }

    /// Number of alphabet values that are the image of something.
    pub fn image_size(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

pub fn decode(message: &str, key: &PolynomialKey) -> Result<String, ExerciseError> {
    match key.degree() {
        Degree::Linear => {
            let a = key.leading();
            let inv = modular_inverse(a).ok_or(ExerciseError::NoModularInverse { a })?;
            let b = modulo(key.coefficients()[1], MODULUS);
            Ok(message
                .chars()
                .map(|c| match alphabet_index(c) {
                    Some(y) => alphabet_char(modulo(inv * (y as i64 - b), MODULUS) as u8),
                    None => c,
                })
                .collect())
        }
        Degree::Quadratic | Degree::Cubic => {
            let table = InverseTable::build(key);
            let mut unmapped = 0usize;
            let out: String = message
                .chars()
                .map(|c| match alphabet_index(c) {
                    Some(y) => match table.lookup(y) {
                        Some(x) => alphabet_char(x),
                        None => {
                            unmapped += 1;
                            c
                        }
                    },
                    None => c,
                })
                .collect();
            if unmapped > 0 {
                debug!(unmapped, "characters outside the key's image were passed through");
            }
            Ok(out)
        }
    }
}

/// `95 - |distinct images|`; zero iff the key permutes the alphabet.
pub fn detect_collisions(key: &PolynomialKey) -> usize {
    ALPHABET_LEN - InverseTable::build(key).image_size()
}

#[derive(Debug, Clone, Serialize)]
pub struct CipherReport {
    pub original: String,
    pub encoded: String,
    pub decoded: String,
    pub degree: u8,
    pub coefficients: Vec<i64>,
    pub collisions: usize,
}

impl CipherReport {
    pub fn round_trips(&self) -> bool {
        self.original == self.decoded
    }
}

/// Validate, count collisions (degree 2/3 only), encode, then decode the result.
pub fn run(message: &str, degree: u8, coefficients: &[i64]) -> Result<CipherReport, ExerciseError> {
    if message.is_empty() {
        return Err(ExerciseError::EmptyInput("message"));
    }
    let key = validate_key(degree, coefficients)?;
    let collisions = match key.degree() {
        Degree::Linear => 0,
        _ => detect_collisions(&key),
    };
    let encoded = encode(message, &key);
    let decoded = decode(&encoded, &key)?;
    debug!(degree, collisions, len = message.chars().count(), "cipher round trip");
    Ok(CipherReport {
        original: message.to_string(),
        encoded,
        decoded,
        degree,
        coefficients: coefficients.to_vec(),
        collisions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn key(degree: u8, c: &[i64]) -> PolynomialKey {
        validate_key(degree, c).unwrap()
    }

    fn naive_image(c: &[i64], x: i64) -> i64 {
        let d = c.len() as u32 - 1;
        let sum: i64 = c.iter().enumerate().map(|(i, &k)| k * x.pow(d - i as u32)).sum();
        ((sum % 95) + 95) % 95
    }

    #[test]
    fn rejects_wrong_count_and_zero_leading() {
        assert_eq!(
            validate_key(1, &[3]),
            Err(ExerciseError::InvalidCoefficientCount { degree: 1, expected: 2, found: 1 })
        );
        assert_eq!(validate_key(2, &[0, 1, 2]), Err(ExerciseError::ZeroLeadingCoefficient));
        assert_eq!(validate_key(4, &[1, 0, 0, 0, 0]), Err(ExerciseError::UnsupportedDegree(4)));
    }

    #[test]
    fn image_matches_direct_evaluation() {
        for c in [&[3i64, 7][..], &[7, 5, 3], &[-4, 11, -200], &[5, 2, 9, 13], &[-1, -1, -1, -1]] {
            let k = key(c.len() as u8 - 1, c);
            for x in 0..95u8 {
                assert_eq!(k.image(x) as i64, naive_image(c, x as i64), "key {:?} x {}", c, x);
            }
        }
    }

    #[test]
    fn linear_example() {
        let k = key(1, &[3, 7]);
        assert_eq!(encode("AB ", &k), "+.'");
        assert_eq!(decode("+.'", &k).unwrap(), "AB ");
    }

    #[test]
    fn linear_without_inverse_fails_on_decode() {
        let k = key(1, &[5, 1]);
        assert_eq!(decode("abc", &k), Err(ExerciseError::NoModularInverse { a: 5 }));
    }

    #[test]
    fn negative_leading_coefficient_has_inverse() {
        let k = key(1, &[-3, 7]);
        let msg = "Hello, World!";
        assert_eq!(decode(&encode(msg, &k), &k).unwrap(), msg);
    }

    #[test]
    fn modular_inverse_search() {
        assert_eq!(modular_inverse(3), Some(32));
        assert_eq!(modular_inverse(1), Some(1));
        assert_eq!(modular_inverse(19), None);
        assert_eq!(modular_inverse(0), None);
    }

    #[test]
    fn table_keeps_first_pre_image() {
        // x^2: 1 and 94 both map to 1
        let k = key(2, &[1, 0, 0]);
        let t = InverseTable::build(&k);
        assert_eq!(t.lookup(1), Some(1));
        assert_eq!(t.lookup(0), Some(0));
    }

    #[test]
    fn collisions_match_enumeration() {
        for c in [&[1i64, 0, 0][..], &[7, 5, 3], &[1, 0, 0, 0], &[5, 2, 9, 13]] {
            let k = key(c.len() as u8 - 1, c);
            let distinct: HashSet<i64> = (0..95).map(|x| naive_image(c, x)).collect();
            assert_eq!(detect_collisions(&k), 95 - distinct.len());
        }
        assert_eq!(detect_collisions(&key(2, &[1, 0, 0])), 65);
    }

    #[test]
    fn decode_passes_through_values_outside_image() {
        let k = key(2, &[1, 0, 0]);
        // 2 is not a square mod 5, so no x has x^2 ≡ 2 (mod 95)
        let y = alphabet_char(2);
        assert_eq!(decode(&y.to_string(), &k).unwrap(), y.to_string());
    }

    #[test]
    fn parse_coefficients_trims_and_rejects() {
        assert_eq!(parse_coefficients(" 7, 5 ,3").unwrap(), vec![7, 5, 3]);
        assert_eq!(parse_coefficients("-1,2").unwrap(), vec![-1, 2]);
        assert_eq!(parse_coefficients("  "), Err(ExerciseError::EmptyInput("coefficients")));
        assert_eq!(parse_coefficients("1,x"), Err(ExerciseError::InvalidCoefficient("x".into())));
    }

    #[test]
    fn run_rejects_empty_message() {
        assert_eq!(run("", 1, &[3, 7]).unwrap_err(), ExerciseError::EmptyInput("message"));
    }

    #[test]
    fn examples_are_valid_keys() {
        for (degree, keys) in EXAMPLE_KEYS {
            for text in *keys {
                let c = parse_coefficients(text).unwrap();
                assert!(validate_key(*degree, &c).is_ok(), "{} / {}", degree, text);
            }
        }
    }
}
