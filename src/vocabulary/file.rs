use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::vocabulary::source::{WordSource, parse_word_lines};

/// Newline-separated word file, such as `/usr/share/dict/words`.
///
/// The file is read each time [`WordSource::words`] is called; generators call
/// it once at construction.
#[derive(Debug, Clone)]
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordList {
    fn words(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)?;
        let words = parse_word_lines(&content);
        info!("Loaded {} words from {}", words.len(), self.path.display());
        Ok(words)
    }
}
