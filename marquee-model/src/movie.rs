//! Wire-format movie records and the display-ready shape built from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::image::{ImageUrls, PosterSize};

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// One movie as it appears on the TMDB wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// TMDB movie id.
    pub id: u64,
    /// Original title.
    pub title: String,
    /// Backdrop artwork path, when the movie has one.
    pub backdrop_path: Option<String>,
    /// Poster artwork path, when the movie has one.
    pub poster_path: Option<String>,
    /// Synopsis text.
    pub overview: String,
    /// Average vote on the 0-10 scale.
    pub vote_average: f64,
    /// Release date in `YYYY-MM-DD` form.
    pub release_date: String,
}

/// One page of a paginated TMDB list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviesPage {
    /// 1-based page number of this payload.
    pub page: u32,
    /// Total pages available for the list.
    pub total_pages: u32,
    /// Total records across all pages. Carried on the wire; the browsing
    /// screen never reads it.
    #[serde(default)]
    pub total_results: u64,
    /// Records on this page, in list order.
    pub results: Vec<MovieRecord>,
}

/// Display-ready movie for the browsing screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// TMDB movie id, passed through from the wire.
    pub id: u64,
    /// Title annotated with the release year, e.g. `"Heat (1995)"`.
    pub title: String,
    /// Synopsis text, passed through from the wire.
    pub overview: String,
    /// Average vote stringified without rounding.
    pub rating: String,
    /// Release date reformatted to `DD.MM.YYYY`.
    pub release_date: String,
    /// Absolute backdrop URL.
    pub backdrop_url: String,
    /// Absolute poster URL.
    pub poster_url: String,
}

impl Movie {
    /// Shape a wire record for display. Deterministic; a malformed release
    /// date is an error, never a silently defaulted record.
    pub fn from_record(record: &MovieRecord, images: &ImageUrls) -> Result<Movie> {
        let released = NaiveDate::parse_from_str(&record.release_date, WIRE_DATE_FORMAT)
            .map_err(|source| ModelError::InvalidReleaseDate {
                value: record.release_date.clone(),
                source,
            })?;

        // The screen hangs both artwork kinds off the w500 rendition.
        let size = PosterSize::W500.as_str();

        Ok(Movie {
            id: record.id,
            title: format!("{} ({})", record.title, released.format("%Y")),
            overview: record.overview.clone(),
            rating: record.vote_average.to_string(),
            release_date: released.format(DISPLAY_DATE_FORMAT).to_string(),
            backdrop_url: images.url(size, record.backdrop_path.as_deref()),
            poster_url: images.url(size, record.poster_path.as_deref()),
        })
    }
}
