use chime_core::{RawTagSet, SongTags};

/// Coerce raw tag values into storage-ready fields.
///
/// Total: malformed input degrades to absent fields, never to an
/// error. `year` and `duration` are parsed as integers and dropped on
/// failure; the string fields pass through untouched. The output type
/// has no play-count slot, so tag data can never supply one.
pub fn normalize(raw: RawTagSet) -> SongTags {
    SongTags {
        title: raw.title,
        artist: raw.artist,
        album: raw.album,
        year: parse_integer(raw.year.as_deref()),
        duration: parse_integer(raw.duration.as_deref()),
    }
}

fn parse_integer(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}
