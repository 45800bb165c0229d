use std::env;

use url::Url;

/// Default TMDB v3 API base.
pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";

/// TMDB connection settings.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// API base, validated as a URL.
    pub api_base: Url,
    /// Artwork base prefixed to wire image paths.
    pub image_base: String,
}

impl TmdbConfig {
    /// Read settings from the environment, loading a `.env` file when one
    /// is present. `TMDB_API_BASE` and `TMDB_IMAGE_BASE` fall back to the
    /// public TMDB hosts; an unset `TMDB_API_KEY` becomes the empty string
    /// and is rejected by the API, not here.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("TMDB_API_KEY").unwrap_or_default();
        let api_base = env::var("TMDB_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&api_base)?;
        let image_base = env::var("TMDB_IMAGE_BASE")
            .unwrap_or_else(|_| marquee_model::TMDB_IMAGE_BASE.to_string());

        Ok(Self {
            api_key,
            api_base,
            image_base,
        })
    }
}
