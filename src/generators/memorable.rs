use log::debug;
use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::error::{GeneratorError, Result};
use crate::generators::alphabet;
use crate::generators::traits::SecretGenerator;
use crate::vocabulary::{EmbeddedWordList, WordSource};

pub const DEFAULT_WORD_COUNT: usize = 5;
pub const DEFAULT_SEPARATOR: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorableOptions {
    pub word_count: usize,
    pub separator: String,
    /// Upper-case every selected word in full (`cat` becomes `CAT`).
    pub capitalization: bool,
}

impl Default for MemorableOptions {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            separator: DEFAULT_SEPARATOR.to_string(),
            capitalization: false,
        }
    }
}

/// Separator-joined words drawn with replacement from a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorablePasswordGenerator {
    options: MemorableOptions,
    vocabulary: Vec<String>,
}

fn check_word_count(word_count: usize) -> Result<()> {
    if word_count == 0 {
        return Err(GeneratorError::InvalidArgument(
            "word count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

impl MemorablePasswordGenerator {
    pub fn new(options: MemorableOptions, vocabulary: Vec<String>) -> Result<Self> {
        check_word_count(options.word_count)?;
        if vocabulary.is_empty() {
            return Err(GeneratorError::Configuration(
                "vocabulary must contain at least one word".to_string(),
            ));
        }
        debug!(
            "Memorable generator configured: words={}, vocabulary size={}, capitalization={}",
            options.word_count,
            vocabulary.len(),
            options.capitalization
        );
        Ok(Self {
            options,
            vocabulary,
        })
    }

    /// Resolve the vocabulary from `source` once. Errors from the source are
    /// returned as-is.
    pub fn from_source(options: MemorableOptions, source: &dyn WordSource) -> Result<Self> {
        check_word_count(options.word_count)?;
        let vocabulary = source.words()?;
        Self::new(options, vocabulary)
    }

    pub fn with_default_vocabulary(options: MemorableOptions) -> Result<Self> {
        Self::from_source(options, &EmbeddedWordList)
    }

    pub fn word_count(&self) -> usize {
        self.options.word_count
    }

    pub fn separator(&self) -> &str {
        &self.options.separator
    }

    pub fn capitalization(&self) -> bool {
        self.options.capitalization
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn entropy_bits(&self) -> f64 {
        alphabet::entropy_bits(self.vocabulary.len(), self.options.word_count)
    }
}

impl SecretGenerator for MemorablePasswordGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        (0..self.options.word_count)
            .filter_map(|_| self.vocabulary.choose(&mut *rng))
            .map(|word| {
                if self.options.capitalization {
                    word.to_uppercase()
                } else {
                    word.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(&self.options.separator)
    }
}
