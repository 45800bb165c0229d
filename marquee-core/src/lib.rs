//! # Marquee Core
//!
//! The client half of the marquee movie-browsing core: a provider
//! capability over the two TMDB browse lists, the concrete HTTP client
//! that satisfies it, and the home-screen state machine that drives
//! pagination.
//!
//! ## Overview
//!
//! - [`provider::MovieProvider`]: capability trait any transport (HTTP
//!   client, test double) can satisfy.
//! - [`tmdb::TmdbClient`]: `reqwest`-backed provider speaking the TMDB v3
//!   `now_playing` / `upcoming` endpoints.
//! - [`screen::HomeScreen`]: two display shelves, per-shelf page counters,
//!   and one shared error slot.
//! - [`config::TmdbConfig`]: environment configuration for the API and
//!   image bases.
//!
//! ## Example
//!
//! ```no_run
//! use marquee_core::{HomeScreen, ShelfKind, TmdbClient, TmdbConfig};
//!
//! # async fn browse() -> anyhow::Result<()> {
//! let config = TmdbConfig::from_env()?;
//! let mut screen = HomeScreen::new(TmdbClient::new(&config));
//!
//! screen.load().await;
//! screen.load_next_page(ShelfKind::Upcoming).await;
//! println!("{} upcoming movies", screen.upcoming().len());
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Environment configuration for the TMDB API.
pub mod config;

/// Error types for providers and the screen state.
pub mod error;

/// The movie provider capability boundary.
pub mod provider;

/// Home-screen shelves and pagination state.
pub mod screen;

/// Tracing subscriber setup.
pub mod telemetry;

/// Concrete TMDB HTTP provider.
pub mod tmdb;

pub use config::TmdbConfig;
pub use error::ProviderError;
pub use provider::MovieProvider;
pub use screen::{HomeScreen, Shelf, ShelfKind, ShelfPhase};
pub use tmdb::TmdbClient;
