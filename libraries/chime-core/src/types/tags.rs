/// Tag value types
use serde::{Deserialize, Serialize};

/// Raw tag values read straight off a media file.
///
/// Ephemeral output of a [`crate::TagReader`]; every field is the
/// untouched string value of its tag frame, or `None` when the frame is
/// absent. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTagSet {
    /// Raw title value
    pub title: Option<String>,

    /// Raw artist value
    pub artist: Option<String>,

    /// Raw album value
    pub album: Option<String>,

    /// Raw year value, not yet coerced to an integer
    pub year: Option<String>,

    /// Raw duration value, not yet coerced to an integer
    pub duration: Option<String>,
}

/// Storage-ready song metadata.
///
/// The statically-shaped partial-update structure: it enumerates
/// exactly the mutable metadata fields of a [`crate::Song`]. There is
/// deliberately no play-count member, so tag-sourced data can never
/// reach that column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongTags {
    /// Track title
    pub title: Option<String>,

    /// Artist name
    pub artist: Option<String>,

    /// Album name
    pub album: Option<String>,

    /// Release year
    pub year: Option<i64>,

    /// Track duration in seconds
    pub duration: Option<i64>,
}

impl SongTags {
    /// Check whether every field is absent
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.year.is_none()
            && self.duration.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_is_empty() {
        assert!(SongTags::default().is_empty());

        let filled = SongTags {
            year: Some(1999),
            ..SongTags::default()
        };
        assert!(!filled.is_empty());
    }
}
