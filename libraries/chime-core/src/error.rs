/// Core error types for the tag-decoding boundary
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting tags from a media file.
///
/// Both variants are file-level failures. A file that parses but is
/// missing individual tags is not an error; the absent fields simply
/// stay empty in the extracted [`crate::types::RawTagSet`].
#[derive(Error, Debug)]
pub enum TagError {
    /// The path does not resolve to an existing file
    #[error("file not found: {0}")]
    FileMissing(PathBuf),

    /// The tag decoder could not parse the file, or the file carries
    /// no tag container at all
    #[error("unreadable media file {path}: {reason}")]
    Unreadable {
        /// Path of the offending file
        path: PathBuf,
        /// Decoder-provided failure description
        reason: String,
    },
}

impl TagError {
    /// Create an [`TagError::Unreadable`] error for the given path
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Unreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
