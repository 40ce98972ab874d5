//! Media tree traversal

use crate::validator;
use chime_core::{SongTags, TagReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// One catalog candidate produced by the walker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongFile {
    /// Path relative to the media root (the catalog key)
    pub path: String,

    /// Normalized metadata
    pub tags: SongTags,
}

/// Walks the media root and yields one [`SongFile`] per accepted file.
///
/// Symbolic links are followed; walkdir reports link cycles as walk
/// errors, which are logged and skipped, so traversal of a cyclic tree
/// still terminates with the acyclic subset visited.
pub struct LibraryWalker<R> {
    root: PathBuf,
    extensions: Vec<String>,
    reader: R,
}

impl<R: TagReader> LibraryWalker<R> {
    pub fn new(root: impl Into<PathBuf>, extensions: Vec<String>, reader: R) -> Self {
        Self {
            root: root.into(),
            extensions,
            reader,
        }
    }

    /// Lazily enumerate the accepted media files under the root.
    ///
    /// Files that fail tag extraction are logged and skipped, whether
    /// the decoder rejected them or they vanished between the directory
    /// listing and the read. Each surviving file appears exactly once,
    /// in directory-traversal order.
    pub fn walk(&self) -> impl Iterator<Item = SongFile> + '_ {
        info!("collecting songs in {}", self.root.display());

        WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_map(move |entry| self.process_entry(entry))
    }

    fn process_entry(&self, entry: walkdir::Result<walkdir::DirEntry>) -> Option<SongFile> {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // unreadable directories and symlink loops land here
                warn!("walk error: {}", e);
                return None;
            }
        };

        if !entry.file_type().is_file() {
            return None;
        }

        let path = entry.path();
        if !self.accepts(path) {
            return None;
        }

        // store the root-relative path in the catalog
        let rel = path
            .strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();

        match self.reader.extract(path) {
            Ok(raw) => {
                info!("parsed: {}", rel);
                Some(SongFile {
                    path: rel,
                    tags: validator::normalize(raw),
                })
            }
            Err(e) => {
                warn!("error parsing: {}: {}", rel, e);
                None
            }
        }
    }

    /// Extension is the text after the final dot, compared as found
    fn accepts(&self, path: &Path) -> bool {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        self.extensions.iter().any(|accepted| accepted == ext)
    }
}
