use rand::Rng;
use std::fmt;
use tracing::debug;

use crate::charset::CharacterPool;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInput),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    ZeroLength,
    EmptyPool,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::ZeroLength => f.write_str("length must be positive"),
            InvalidInput::EmptyPool => f.write_str("character pool is empty"),
        }
    }
}

/// Samples `length` characters from `pool`, with replacement.
///
/// `random` must yield values in `[0, 1)`; each one picks a position in the
/// pool. Nothing here is a cryptographic boundary, any general purpose source
/// will do.
pub fn generate(
    pool: &CharacterPool,
    length: usize,
    mut random: impl FnMut() -> f64,
) -> Result<String, PasswordError> {
    if length == 0 {
        return Err(PasswordError::InvalidInput(InvalidInput::ZeroLength));
    }
    if pool.is_empty() {
        return Err(PasswordError::InvalidInput(InvalidInput::EmptyPool));
    }

    debug!(pool = pool.len(), length, "generating password");

    let chars = pool.chars();
    let last = chars.len() - 1;

    Ok((0..length)
        .map(|_| {
            // u * len can round up to len when u is close to 1
            let idx = ((random() * chars.len() as f64) as usize).min(last);
            chars[idx]
        })
        .collect())
}

/// Same as [`generate`], drawing from any `rand` generator.
pub fn generate_with_rng<R: Rng>(
    pool: &CharacterPool,
    length: usize,
    rng: &mut R,
) -> Result<String, PasswordError> {
    generate(pool, length, || rng.random::<f64>())
}

/// Generates with the thread-local generator.
pub fn generate_password(pool: &CharacterPool, length: usize) -> Result<String, PasswordError> {
    // Use rand::rng() in rand 0.9.x
    let mut rng = rand::rng();
    generate_with_rng(pool, length, &mut rng)
}

/// Entropy in bits of a password of `length` uniform draws from `pool_len` characters.
pub fn estimate_entropy(pool_len: usize, length: usize) -> f64 {
    if pool_len == 0 {
        return 0.0;
    }
    length as f64 * (pool_len as f64).log2()
}
