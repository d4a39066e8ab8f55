use log::debug;
use rand::RngCore;

use crate::error::{GeneratorError, Result};
use crate::generators::alphabet;
use crate::generators::traits::SecretGenerator;

/// Fixed-length password over ASCII letters, optionally widened with digits
/// and punctuation.
///
/// Character classes are not enforced per output: a password built with
/// `include_numbers` may still contain no digit. Callers that need class
/// coverage must check and draw again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPasswordGenerator {
    length: usize,
    alphabet: Vec<u8>,
}

impl RandomPasswordGenerator {
    pub fn new(length: usize, include_numbers: bool, include_symbols: bool) -> Result<Self> {
        if length == 0 {
            return Err(GeneratorError::InvalidArgument(
                "password length must be at least 1".to_string(),
            ));
        }
        let alphabet = alphabet::build(include_numbers, include_symbols);
        debug!(
            "Random password generator configured: length={}, alphabet size={}",
            length,
            alphabet.len()
        );
        Ok(Self { length, alphabet })
    }

    /// Letters only, the default alphabet.
    pub fn letters_only(length: usize) -> Result<Self> {
        Self::new(length, false, false)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn entropy_bits(&self) -> f64 {
        alphabet::entropy_bits(self.alphabet.len(), self.length)
    }
}

impl SecretGenerator for RandomPasswordGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        alphabet::sample(&self.alphabet, self.length, rng)
    }
}
