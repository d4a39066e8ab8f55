pub mod embedded;
pub mod file;
pub mod source;

pub use embedded::EmbeddedWordList;
pub use file::FileWordList;
pub use source::WordSource;

#[cfg(test)]
pub use source::MockWordSource;
