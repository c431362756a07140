//! Validation of the raw password-length field.

use std::num::IntErrorKind;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

/// Reasons the length field is rejected. The messages are shown inline.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required")]
    Required,
    #[error("Must be a number")]
    NotANumber,
    #[error("Too Short!")]
    TooShort,
    #[error("Too Long!")]
    TooLong,
}

/// A length that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestedLength(usize);

impl RequestedLength {
    pub fn get(self) -> usize {
        self.0
    }
}

/// Inclusive bounds for the requested length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthValidator {
    min: usize,
    max: usize,
}

impl Default for LengthValidator {
    fn default() -> Self {
        Self {
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        }
    }
}

impl LengthValidator {
    /// Bounds are reordered if given backwards. A zero bound is raised to 1.
    pub fn new(min: usize, max: usize) -> Self {
        let (min, max) = (min.max(1), max.max(1));
        Self {
            min: min.min(max),
            max: max.max(min),
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn validate(&self, raw: &str) -> Result<RequestedLength, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::Required);
        }

        let value: i128 = raw.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow => ValidationError::TooLong,
            IntErrorKind::NegOverflow => ValidationError::TooShort,
            _ => ValidationError::NotANumber,
        })?;

        if value < 0 {
            return Err(ValidationError::TooShort);
        }
        let value = usize::try_from(value).map_err(|_| ValidationError::TooLong)?;

        if value < self.min {
            Err(ValidationError::TooShort)
        } else if value > self.max {
            Err(ValidationError::TooLong)
        } else {
            Ok(RequestedLength(value))
        }
    }
}

/// Validates against the default `[4, 16]` range.
pub fn validate(raw: &str) -> Result<RequestedLength, ValidationError> {
    LengthValidator::default().validate(raw)
}
