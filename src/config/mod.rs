pub mod factory;
pub mod models;

pub use factory::{GeneratedSecret, create_generator, generate_all, generate_all_with};
pub use models::{GeneratorConfig, HashingAlgorithm, SecretConfig, SecretsDocument};
