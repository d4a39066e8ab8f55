use std::collections::HashMap;

use log::{debug, info};
use rand::RngCore;

use crate::config::models::{GeneratorConfig, HashingAlgorithm, SecretConfig};
use crate::error::{GeneratorError, Result};
use crate::generators::{
    MemorableOptions, MemorablePasswordGenerator, PinGenerator, RandomPasswordGenerator,
    SecretGenerator, create_hasher,
};

/// A drawn secret, plus its crypt-format hash when one was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSecret {
    pub value: String,
    pub hashed: Option<String>,
}

pub fn create_generator(config: &GeneratorConfig) -> Result<Box<dyn SecretGenerator>> {
    let generator: Box<dyn SecretGenerator> = match config {
        GeneratorConfig::Pin { length } => Box::new(PinGenerator::new(*length)?),
        GeneratorConfig::Random {
            length,
            include_numbers,
            include_symbols,
        } => Box::new(RandomPasswordGenerator::new(
            *length,
            *include_numbers,
            *include_symbols,
        )?),
        GeneratorConfig::Memorable {
            word_count,
            separator,
            capitalization,
            vocabulary,
        } => {
            let options = MemorableOptions {
                word_count: *word_count,
                separator: separator.clone(),
                capitalization: *capitalization,
            };
            match vocabulary {
                Some(words) => Box::new(MemorablePasswordGenerator::new(options, words.clone())?),
                None => Box::new(MemorablePasswordGenerator::with_default_vocabulary(options)?),
            }
        }
    };
    Ok(generator)
}

pub fn generate_all(secrets: &[SecretConfig]) -> Result<HashMap<String, GeneratedSecret>> {
    generate_all_with(secrets, &mut rand::rng())
}

/// Build every generator first, then draw one value each.
///
/// Any invalid definition or duplicate name fails the whole batch before a
/// single value is drawn.
pub fn generate_all_with(
    secrets: &[SecretConfig],
    rng: &mut dyn RngCore,
) -> Result<HashMap<String, GeneratedSecret>> {
    let mut generators: Vec<(&SecretConfig, Box<dyn SecretGenerator>)> =
        Vec::with_capacity(secrets.len());
    for secret in secrets {
        if generators.iter().any(|(seen, _)| seen.name == secret.name) {
            return Err(GeneratorError::Configuration(format!(
                "duplicate secret name: {}",
                secret.name
            )));
        }
        let generator = create_generator(&secret.generator)?;
        generators.push((secret, generator));
    }

    let mut result = HashMap::with_capacity(generators.len());
    for (secret, generator) in generators {
        let value = generator.generate_with(rng);
        let hashed = match secret.hashing_algorithm {
            HashingAlgorithm::None => None,
            ref algorithm => Some(create_hasher(algorithm).hash(&value)?),
        };
        debug!(
            "Generated secret '{}' (hashing: {:?})",
            secret.name, secret.hashing_algorithm
        );
        result.insert(secret.name.clone(), GeneratedSecret { value, hashed });
    }
    info!("Generated {} secrets", result.len());
    Ok(result)
}
