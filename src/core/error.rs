use std::fmt;

/// Errors raised by the exercise modules. Each one ends the current request
/// and is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseError {
    InvalidCoefficientCount { degree: u8, expected: usize, found: usize },
    ZeroLeadingCoefficient,
    NoModularInverse { a: i64 },
    UnsupportedDegree(u8),
    InvalidCoefficient(String),
    EmptyInput(&'static str),
    InvalidBound { name: &'static str, min: u64, got: u64 },
    LimitExceeded { name: &'static str, max: u64, got: u64 },
}

impl fmt::Display for ExerciseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseError::InvalidCoefficientCount { degree, expected, found } => write!(
                f,
                "Invalid Key: degree {} requires {} coefficients, got {}",
                degree, expected, found
            ),
            ExerciseError::ZeroLeadingCoefficient => {
                write!(f, "Invalid Key: the leading coefficient 'a' must be non-zero")
            }
            ExerciseError::NoModularInverse { a } => {
                write!(f, "Invalid Key: coefficient 'a' = {} has no modular inverse mod 95", a)
            }
            ExerciseError::UnsupportedDegree(d) => {
                write!(f, "Invalid Key: degree must be 1, 2 or 3, got {}", d)
            }
            ExerciseError::InvalidCoefficient(tok) => {
                write!(f, "Invalid Input: '{}' is not an integer coefficient", tok)
            }
            ExerciseError::EmptyInput(what) => write!(f, "Invalid Input: {} is required", what),
            ExerciseError::InvalidBound { name, min, got } => {
                write!(f, "Invalid Input: {} must be at least {}, got {}", name, min, got)
            }
            ExerciseError::LimitExceeded { name, max, got } => {
                write!(f, "Limit Exceeded: {} is capped at {}, got {}", name, max, got)
            }
        }
    }
}

impl std::error::Error for ExerciseError {}

impl ExerciseError {
    pub fn bound(name: &'static str, min: u64, got: u64) -> Self {
        ExerciseError::InvalidBound { name, min, got }
    }
}

/// Rejects `got` below `min`.
pub fn require_at_least(name: &'static str, min: u64, got: u64) -> Result<(), ExerciseError> {
    if got < min {
        return Err(ExerciseError::bound(name, min, got));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_coefficient_count_message() {
        let err = ExerciseError::InvalidCoefficientCount { degree: 1, expected: 2, found: 1 };
        assert_eq!(format!("{}", err), "Invalid Key: degree 1 requires 2 coefficients, got 1");
    }
    #[test] fn test_zero_leading_message() {
        let err = ExerciseError::ZeroLeadingCoefficient;
        assert_eq!(format!("{}", err), "Invalid Key: the leading coefficient 'a' must be non-zero");
    }
    #[test] fn test_no_inverse_message() {
        let err = ExerciseError::NoModularInverse { a: 5 };
        assert_eq!(format!("{}", err), "Invalid Key: coefficient 'a' = 5 has no modular inverse mod 95");
    }
    #[test] fn test_bound_message() {
        let err = ExerciseError::bound("N", 2, 1);
        assert_eq!(format!("{}", err), "Invalid Input: N must be at least 2, got 1");
    }
    #[test] fn test_require_at_least() {
        assert!(require_at_least("N", 2, 2).is_ok());
        assert_eq!(require_at_least("N", 2, 0), Err(ExerciseError::bound("N", 2, 0)));
    }
}
