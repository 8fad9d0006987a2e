use std::sync::Mutex;

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::core::config::RngPolicy;
use crate::models::{PasswordGenerationOptions, MAX_BATCH_COUNT, MIN_PASSWORD_LENGTH, SYMBOLS};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("{0}")]
    InvalidConfiguration(String),
}

/// Characters enabled by `options`, in the order uppercase, lowercase, digits, symbols.
pub fn character_pool(options: &PasswordGenerationOptions) -> Vec<char> {
    let mut pool = Vec::new();

    if options.include_uppercase {
        pool.extend(UPPERCASE.chars());
    }
    if options.include_lowercase {
        pool.extend(LOWERCASE.chars());
    }
    if options.include_digits {
        pool.extend(DIGITS.chars());
    }
    if options.include_symbols {
        pool.extend(SYMBOLS.chars());
    }

    pool
}

pub fn validate_length(length: usize) -> Result<(), GeneratorError> {
    if length < MIN_PASSWORD_LENGTH {
        return Err(GeneratorError::InvalidConfiguration(format!(
            "Minimum length is {}.",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Check a batch request up front: length, then count, then character classes.
pub fn validate_batch(options: &PasswordGenerationOptions, count: usize) -> Result<(), GeneratorError> {
    validate_length(options.length)?;
    if count > MAX_BATCH_COUNT {
        return Err(GeneratorError::InvalidConfiguration(format!(
            "Maximum number of passwords is {}.",
            MAX_BATCH_COUNT
        )));
    }
    if !options.any_class_enabled() {
        return Err(GeneratorError::InvalidConfiguration(
            "At least one character type must be enabled.".to_string(),
        ));
    }
    Ok(())
}

/// Draw `options.length` characters uniformly, with replacement, from the enabled pool.
pub fn generate_password<R: Rng + ?Sized>(
    options: &PasswordGenerationOptions,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    let pool = character_pool(options);
    if pool.is_empty() {
        return Err(GeneratorError::InvalidConfiguration(
            "At least one character type must be enabled.".to_string(),
        ));
    }

    Ok((0..options.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}

/// Owns the process-wide random source shared by request handlers.
pub struct PasswordGenerator {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl PasswordGenerator {
    pub fn new(rng: Box<dyn RngCore + Send>) -> Self {
        PasswordGenerator { rng: Mutex::new(rng) }
    }

    /// Build the random source named by `policy`. A seed makes the stream reproducible.
    pub fn from_policy(policy: RngPolicy, seed: Option<u64>) -> Self {
        let rng: Box<dyn RngCore + Send> = match (policy, seed) {
            (RngPolicy::Secure, None) => Box::new(ChaCha20Rng::from_entropy()),
            (RngPolicy::Secure, Some(seed)) => Box::new(ChaCha20Rng::seed_from_u64(seed)),
            (RngPolicy::Fast, None) => Box::new(SmallRng::from_entropy()),
            (RngPolicy::Fast, Some(seed)) => Box::new(SmallRng::seed_from_u64(seed)),
        };
        Self::new(rng)
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String, GeneratorError> {
        // RNG state stays valid after a panic elsewhere, so poisoning is ignored.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generate_password(options, &mut **rng)
    }

    /// Generate `count` passwords with the same options, all-or-nothing.
    pub fn generate_batch(
        &self,
        options: &PasswordGenerationOptions,
        count: usize,
    ) -> Result<Vec<String>, GeneratorError> {
        validate_batch(options, count)?;

        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        (0..count)
            .map(|_| generate_password(options, &mut **rng))
            .collect()
    }
}
