//! Core data model definitions shared across marquee crates.
//!
//! The wire-format types in [`movie`] mirror the TMDB v3 JSON payloads;
//! [`Movie`] is the display-ready shape the browsing screen renders, and
//! [`image`] holds the artwork size vocabulary and URL building.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod image;
pub mod movie;

pub use error::{ModelError, Result as ModelResult};
pub use image::{BackdropSize, ImageUrls, PosterSize, TMDB_IMAGE_BASE};
pub use movie::{Movie, MovieRecord, MoviesPage};
