use crate::error::Result;

/// Supplies the candidate words for a memorable passphrase.
///
/// Consulted once, when a generator is built. Implementations may be slow or
/// touch the filesystem; their errors reach the caller unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait WordSource {
    fn words(&self) -> Result<Vec<String>>;
}

/// One word per line; surrounding whitespace trimmed, blank lines dropped.
pub(crate) fn parse_word_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
