//! Generators for numeric PINs, random character passwords and memorable
//! multi-word passphrases.
//!
//! Every generator validates its parameters at construction and implements
//! [`SecretGenerator`], so mixed generators can be stored together and drawn
//! from uniformly:
//!
//! ```
//! use secretforge::{MemorableOptions, MemorablePasswordGenerator, PinGenerator, SecretGenerator};
//!
//! let pin = PinGenerator::new(6)?;
//! let phrase = MemorablePasswordGenerator::new(
//!     MemorableOptions { word_count: 3, capitalization: true, ..Default::default() },
//!     vec!["cat".into(), "dog".into(), "sun".into()],
//! )?;
//!
//! let generators: Vec<Box<dyn SecretGenerator>> = vec![Box::new(pin), Box::new(phrase)];
//! for generator in &generators {
//!     assert!(!generator.generate().is_empty());
//! }
//! # Ok::<(), secretforge::GeneratorError>(())
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod vocabulary;

pub use config::{GeneratedSecret, GeneratorConfig, HashingAlgorithm, SecretConfig, SecretsDocument};
pub use error::{GeneratorError, Result};
pub use generators::{
    MemorableOptions, MemorablePasswordGenerator, PinGenerator, RandomPasswordGenerator,
    SecretGenerator, SecretHasher,
};
pub use vocabulary::{EmbeddedWordList, FileWordList, WordSource};
