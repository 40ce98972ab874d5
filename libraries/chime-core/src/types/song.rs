/// Song domain type
use crate::types::SongTags;
use serde::{Deserialize, Serialize};

/// One media file's catalog entry.
///
/// `path` is relative to the media root and uniquely identifies a live
/// record, so the catalog survives a relocation of the root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Surrogate catalog key
    pub id: i64,

    /// File path relative to the media root (unique)
    pub path: String,

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

    /// Times the track has been played.
    ///
    /// Owned by the playback side of the system; the synchronizer only
    /// ever carries it through unchanged.
    pub play_count: i64,
}

impl Song {
    /// The mutable metadata portion of this record
    pub fn tags(&self) -> SongTags {
        SongTags {
            title: self.title.clone(),
            artist: self.artist.clone(),
            album: self.album.clone(),
            year: self.year,
            duration: self.duration,
        }
    }
}
