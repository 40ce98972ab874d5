/// Core traits for the Chime media catalog
use crate::error::TagError;
use crate::types::RawTagSet;
use std::path::Path;

/// Tag reader trait
///
/// Implementers map a file path to its raw tag values or a file-level
/// failure. Missing individual tags are reported as absent fields, not
/// as errors.
pub trait TagReader: Send {
    /// Extract the raw tag values from a media file
    ///
    /// # Errors
    /// Returns [`TagError::FileMissing`] if the path does not exist and
    /// [`TagError::Unreadable`] if the file cannot be parsed or holds
    /// no tag container.
    fn extract(&self, path: &Path) -> Result<RawTagSet, TagError>;
}

impl<T: TagReader + Sync> TagReader for &T {
    fn extract(&self, path: &Path) -> Result<RawTagSet, TagError> {
        (**self).extract(path)
    }
}
