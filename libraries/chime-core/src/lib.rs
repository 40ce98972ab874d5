//! Chime Core
//!
//! Shared types, traits, and error handling for the Chime media catalog.
//!
//! This crate defines:
//! - **Domain Types**: `Song`, `SongTags`, `RawTagSet`
//! - **Core Traits**: `TagReader` (the tag-decoding boundary)
//! - **Error Handling**: `TagError`
//!
//! # Example
//!
//! ```rust
//! use chime_core::types::{RawTagSet, SongTags};
//!
//! let raw = RawTagSet {
//!     title: Some("Song A".to_string()),
//!     ..RawTagSet::default()
//! };
//! assert!(raw.artist.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use error::TagError;
pub use traits::TagReader;
pub use types::{RawTagSet, Song, SongTags};
