use once_cell::sync::Lazy;

use crate::error::Result;
use crate::vocabulary::source::WordSource;

const WORDLIST: &str = include_str!("../../assets/wordlist.txt");

static FILTERED_WORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    WORDLIST
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.contains('-'))
        .collect()
});

/// The word list compiled into the crate. Used when no vocabulary is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordList;

impl WordSource for EmbeddedWordList {
    fn words(&self) -> Result<Vec<String>> {
        Ok(FILTERED_WORDS.iter().map(|w| w.to_string()).collect())
    }
}
