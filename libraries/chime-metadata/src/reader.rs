/// Tag reader implementation using lofty
use chime_core::{RawTagSet, TagError, TagReader};
use lofty::{ItemKey, Tag, TaggedFileExt};
use std::path::Path;

/// Tag reader backed by the lofty library.
///
/// Only file-level problems are errors; a parsed file with missing
/// individual frames yields absent fields.
pub struct LoftyTagReader;

impl LoftyTagReader {
    /// Create a new tag reader
    pub fn new() -> Self {
        Self
    }

    /// Pull the five semantic fields out of a tag container.
    ///
    /// The ID3v2 frame identifiers are the canonical keys: TIT2 title,
    /// TPE1 artist, TALB album, TDRC year, TLEN duration. lofty
    /// surfaces them as the item keys below for every tag format.
    fn extract_from_tag(tag: &Tag) -> RawTagSet {
        let text = |key: &ItemKey| tag.get_string(key).map(str::to_owned);

        RawTagSet {
            title: text(&ItemKey::TrackTitle),
            artist: text(&ItemKey::TrackArtist),
            album: text(&ItemKey::AlbumTitle),
            // TDRC; older ID3v2.3 files carry TYER, which lofty maps
            // to the separate Year key
            year: text(&ItemKey::RecordingDate).or_else(|| text(&ItemKey::Year)),
            duration: text(&ItemKey::Length),
        }
    }
}

impl Default for LoftyTagReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TagReader for LoftyTagReader {
    fn extract(&self, path: &Path) -> Result<RawTagSet, TagError> {
        if !path.exists() {
            return Err(TagError::FileMissing(path.to_path_buf()));
        }

        let tagged_file = lofty::read_from_path(path)
            .map_err(|e| TagError::unreadable(path, e.to_string()))?;

        // Prefer the format's primary tag, fall back to whatever tag
        // the file carries
        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.tags().first())
            .ok_or_else(|| TagError::unreadable(path, "no tag container"))?;

        Ok(Self::extract_from_tag(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_file_missing() {
        let reader = LoftyTagReader::new();
        let err = reader
            .extract(Path::new("/nonexistent/file.mp3"))
            .unwrap_err();
        assert!(matches!(err, TagError::FileMissing(_)));
    }

    #[test]
    fn garbage_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.mp3");
        std::fs::write(&path, b"definitely not an mp3 stream").unwrap();

        let reader = LoftyTagReader::new();
        let err = reader.extract(&path).unwrap_err();
        assert!(matches!(err, TagError::Unreadable { .. }));
    }
}
