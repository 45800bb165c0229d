use async_trait::async_trait;
use marquee_model::MoviesPage;
use reqwest::StatusCode;

use crate::config::TmdbConfig;
use crate::error::ProviderError;
use crate::provider::MovieProvider;

/// HTTP provider speaking the TMDB v3 movie list endpoints.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl TmdbClient {
    /// Build a client from connection settings.
    pub fn new(config: &TmdbConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_base: config.api_base.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn list_url(&self, list: &str) -> String {
        format!("{}/movie/{}", self.api_base, list)
    }

    fn status_error(status: StatusCode, url: &str) -> ProviderError {
        match status {
            StatusCode::UNAUTHORIZED => ProviderError::InvalidApiKey,
            StatusCode::NOT_FOUND => ProviderError::NotFound,
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
            status => ProviderError::Api(format!("unexpected status {status} from {url}")),
        }
    }

    async fn fetch_page(&self, list: &str, page: u32) -> Result<MoviesPage, ProviderError> {
        tracing::info!("Fetching {} movies (page {})", list, page);

        let url = self.list_url(list);
        let page = page.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("page", page.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, &url));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MovieProvider for TmdbClient {
    async fn now_playing(&self, page: u32) -> Result<MoviesPage, ProviderError> {
        self.fetch_page("now_playing", page).await
    }

    async fn upcoming(&self, page: u32) -> Result<MoviesPage, ProviderError> {
        self.fetch_page("upcoming", page).await
    }
}
