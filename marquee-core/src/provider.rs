use async_trait::async_trait;
use marquee_model::MoviesPage;

use crate::error::ProviderError;

/// Capability boundary for anything that can serve the two browse lists.
/// Satisfied by [`crate::tmdb::TmdbClient`] in production and by scripted
/// doubles in tests.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Fetch one page of movies currently in theaters.
    async fn now_playing(&self, page: u32) -> Result<MoviesPage, ProviderError>;

    /// Fetch one page of upcoming movies.
    async fn upcoming(&self, page: u32) -> Result<MoviesPage, ProviderError>;
}
