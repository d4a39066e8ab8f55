use sha_crypt::{Sha512Params, sha512_simple};
use yescrypt::{PasswordHasher as YescryptPasswordHasher, Yescrypt};

use crate::config::models::HashingAlgorithm;
use crate::error::{GeneratorError, Result};

const SHA512_ROUNDS: usize = 5000;

/// Turns a generated secret into a crypt(3)-style hash string.
pub trait SecretHasher: Send + Sync {
    fn hash(&self, secret: &str) -> Result<String>;
}

pub struct Sha512Hasher;

impl SecretHasher for Sha512Hasher {
    fn hash(&self, secret: &str) -> Result<String> {
        let params = Sha512Params::new(SHA512_ROUNDS)
            .map_err(|e| GeneratorError::Hashing(format!("invalid SHA-512 rounds: {e:?}")))?;
        sha512_simple(secret, &params)
            .map_err(|e| GeneratorError::Hashing(format!("SHA-512 hashing failed: {e:?}")))
    }
}

pub struct YescryptHasher;

impl SecretHasher for YescryptHasher {
    fn hash(&self, secret: &str) -> Result<String> {
        Yescrypt
            .hash_password(secret.as_bytes())
            .map(|hash| hash.to_string())
            .map_err(|e| GeneratorError::Hashing(format!("yescrypt hashing failed: {e:?}")))
    }
}

pub struct NoOpHasher;

impl SecretHasher for NoOpHasher {
    fn hash(&self, secret: &str) -> Result<String> {
        Ok(secret.to_string())
    }
}

pub fn create_hasher(algorithm: &HashingAlgorithm) -> Box<dyn SecretHasher> {
    match algorithm {
        HashingAlgorithm::None => Box::new(NoOpHasher),
        HashingAlgorithm::Sha512 => Box::new(Sha512Hasher),
        HashingAlgorithm::Yescrypt => Box::new(YescryptHasher),
    }
}
