//! Artwork size vocabulary and URL building for TMDB-hosted images.

/// Base path for TMDB-hosted artwork.
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Poster size variants offered by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PosterSize {
    /// 92px wide
    W92,
    /// 154px wide
    W154,
    /// 185px wide
    W185,
    /// 342px wide
    W342,
    /// 500px wide
    W500,
    /// 780px wide
    W780,
    /// Source resolution
    Original,
}

impl PosterSize {
    /// URL path segment for this size.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W92 => "w92",
            PosterSize::W154 => "w154",
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

/// Backdrop size variants offered by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BackdropSize {
    /// 300px wide
    W300,
    /// 780px wide
    W780,
    /// 1280px wide
    W1280,
    /// Source resolution
    Original,
}

impl BackdropSize {
    /// URL path segment for this size.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::W300 => "w300",
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

/// Builder for absolute artwork URLs.
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base: String,
}

impl ImageUrls {
    /// Wrap an artwork base path such as [`TMDB_IMAGE_BASE`].
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Build a poster URL from a poster path.
    pub fn poster(&self, path: Option<&str>, size: PosterSize) -> String {
        self.url(size.as_str(), path)
    }

    /// Build a backdrop URL from a backdrop path.
    pub fn backdrop(&self, path: Option<&str>, size: BackdropSize) -> String {
        self.url(size.as_str(), path)
    }

    /// Build a sized artwork URL. An absent path yields the bare sized
    /// base; the original screen shipped that URL as-is, so it is kept
    /// rather than corrected.
    pub fn url(&self, size: &str, path: Option<&str>) -> String {
        format!("{}/{}{}", self.base, size, path.unwrap_or(""))
    }
}

impl Default for ImageUrls {
    fn default() -> Self {
        Self::new(TMDB_IMAGE_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sized_url_prefixes_base_and_size() {
        let images = ImageUrls::default();
        assert_eq!(
            images.poster(Some("/poster"), PosterSize::W500),
            "https://image.tmdb.org/t/p/w500/poster"
        );
        assert_eq!(
            images.backdrop(Some("/backdrop"), BackdropSize::W1280),
            "https://image.tmdb.org/t/p/w1280/backdrop"
        );
    }

    #[test]
    fn absent_path_yields_bare_sized_base() {
        let images = ImageUrls::default();
        assert_eq!(
            images.poster(None, PosterSize::W500),
            "https://image.tmdb.org/t/p/w500"
        );
    }
}
