use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};
use crate::generators::memorable::{DEFAULT_SEPARATOR, DEFAULT_WORD_COUNT};

/// Generator parameters with tagged serialisation.
/// Serialises to: {"type": "random", "length": 16, "include_numbers": true, ...}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GeneratorConfig {
    Pin {
        length: usize,
    },
    Random {
        length: usize,
        #[serde(default)]
        include_numbers: bool,
        #[serde(default)]
        include_symbols: bool,
    },
    Memorable {
        #[serde(default = "default_word_count")]
        word_count: usize,
        #[serde(default = "default_separator")]
        separator: String,
        #[serde(default)]
        capitalization: bool,
        /// Inline word list. When absent the embedded word list is used.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        vocabulary: Option<Vec<String>>,
    },
}

fn default_word_count() -> usize {
    DEFAULT_WORD_COUNT
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum HashingAlgorithm {
    #[default]
    None,
    Sha512,
    Yescrypt,
}

/// A named secret: how to draw it and, optionally, how to hash it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SecretConfig {
    pub name: String,
    #[serde(flatten)]
    pub generator: GeneratorConfig,
    /// Use 'sha512' or 'yescrypt' when a crypt-format hash is needed next to
    /// the clear value.
    #[serde(default)]
    pub hashing_algorithm: HashingAlgorithm,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SecretsDocument {
    #[serde(default)]
    pub secrets: Vec<SecretConfig>,
}

impl SecretsDocument {
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        serde_yaml::from_str(yaml_str).map_err(|e| GeneratorError::ConfigParse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GeneratorError::ConfigParse(format!("YAML emit error: {}", e)))
    }
}
