//! Chime Metadata
//!
//! Tag extraction for the Chime media catalog.
//!
//! This crate provides the lofty-backed implementation of the
//! [`chime_core::TagReader`] boundary: given a file path it returns the
//! raw values of a fixed set of tag frames, or a file-level failure.
//!
//! # Example
//!
//! ```rust,no_run
//! use chime_core::TagReader;
//! use chime_metadata::LoftyTagReader;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), chime_core::TagError> {
//! let reader = LoftyTagReader::new();
//! let raw = reader.extract(Path::new("/music/song.mp3"))?;
//! println!("title: {:?}", raw.title);
//! # Ok(())
//! # }
//! ```

mod reader;

pub use reader::LoftyTagReader;
