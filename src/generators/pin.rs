use log::debug;
use rand::RngCore;

use crate::error::{GeneratorError, Result};
use crate::generators::alphabet::{self, DIGITS};
use crate::generators::traits::SecretGenerator;

/// Fixed-length numeric code. Leading zeros are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinGenerator {
    length: usize,
}

impl PinGenerator {
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(GeneratorError::InvalidArgument(
                "PIN length must be at least 1".to_string(),
            ));
        }
        debug!("PIN generator configured for {} digits", length);
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn entropy_bits(&self) -> f64 {
        alphabet::entropy_bits(DIGITS.len(), self.length)
    }
}

impl SecretGenerator for PinGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        alphabet::sample(DIGITS, self.length, rng)
    }
}
