use marquee_model::{ImageUrls, Movie, MoviesPage};

use crate::error::ProviderError;
use crate::provider::MovieProvider;

/// The two browse lists the screen renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfKind {
    /// Movies currently in theaters.
    NowPlaying,
    /// Movies with upcoming releases.
    Upcoming,
}

/// Lifecycle of one shelf's most recent fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShelfPhase {
    /// No fetch issued yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch landed and the list reflects it.
    Loaded,
    /// The last fetch failed; the list is whatever it was before.
    Failed,
}

/// One ordered display list plus the counters driving its pagination.
#[derive(Debug, Default)]
pub struct Shelf {
    movies: Vec<Movie>,
    page: u32,
    total_pages: u32,
    phase: ShelfPhase,
}

impl Shelf {
    /// Display records in list order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of display records on the shelf.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the shelf holds no records.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// 1-based page the shelf currently ends at; 0 before the first load.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Last known total-pages count for the list.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Lifecycle of the most recent fetch.
    pub fn phase(&self) -> ShelfPhase {
        self.phase
    }

    // Next-page requests are only issued while pages remain.
    fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    fn replace(&mut self, page: &MoviesPage, movies: Vec<Movie>) {
        self.movies = movies;
        self.page = page.page;
        self.total_pages = page.total_pages;
        self.phase = ShelfPhase::Loaded;
    }

    fn append(&mut self, page: &MoviesPage, movies: Vec<Movie>) {
        self.movies.extend(movies);
        self.page = page.page;
        self.total_pages = page.total_pages;
        self.phase = ShelfPhase::Loaded;
    }
}

/// State for the movie-browsing screen: two shelves, one shared error slot,
/// and the provider they are fed from. All mutation happens through
/// `&mut self`, so fetch completions serialize on the owner.
#[derive(Debug)]
pub struct HomeScreen<P: MovieProvider> {
    provider: P,
    images: ImageUrls,
    now_playing: Shelf,
    upcoming: Shelf,
    error_message: String,
}

impl<P: MovieProvider> HomeScreen<P> {
    /// Build a screen over a provider, using the default TMDB artwork base.
    pub fn new(provider: P) -> Self {
        Self::with_images(provider, ImageUrls::default())
    }

    /// Build a screen over a provider with an explicit artwork base.
    pub fn with_images(provider: P, images: ImageUrls) -> Self {
        Self {
            provider,
            images,
            now_playing: Shelf::default(),
            upcoming: Shelf::default(),
            error_message: String::new(),
        }
    }

    /// The now-playing shelf.
    pub fn now_playing(&self) -> &Shelf {
        &self.now_playing
    }

    /// The upcoming shelf.
    pub fn upcoming(&self) -> &Shelf {
        &self.upcoming
    }

    /// Shelf accessor by kind.
    pub fn shelf(&self, kind: ShelfKind) -> &Shelf {
        match kind {
            ShelfKind::NowPlaying => &self.now_playing,
            ShelfKind::Upcoming => &self.upcoming,
        }
    }

    /// The shared error slot. Empty until a fetch fails; holds the display
    /// string of whichever failure wrote last.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Fetch page 1 of both lists concurrently. A successful fetch replaces
    /// its shelf; a failed one writes the shared error slot and leaves the
    /// shelf as it was. Results are applied now-playing first, so when both
    /// fail the upcoming message wins (the slot is last-write-wins by
    /// contract, see `error_message`).
    pub async fn load(&mut self) {
        self.now_playing.phase = ShelfPhase::Loading;
        self.upcoming.phase = ShelfPhase::Loading;

        let (now_playing, upcoming) =
            tokio::join!(self.provider.now_playing(1), self.provider.upcoming(1));

        self.apply(ShelfKind::NowPlaying, now_playing, Shelf::replace);
        self.apply(ShelfKind::Upcoming, upcoming, Shelf::replace);
    }

    /// Fetch the next page for one shelf and append its records. No-op
    /// once the shelf's current page has reached the last known total:
    /// failures are terminal for the attempt and the caller re-invokes
    /// [`HomeScreen::load`].
    pub async fn load_next_page(&mut self, kind: ShelfKind) {
        if !self.shelf(kind).has_more() {
            return;
        }

        let next = self.shelf(kind).page + 1;
        self.shelf_mut(kind).phase = ShelfPhase::Loading;

        let result = match kind {
            ShelfKind::NowPlaying => self.provider.now_playing(next).await,
            ShelfKind::Upcoming => self.provider.upcoming(next).await,
        };

        self.apply(kind, result, Shelf::append);
    }

    fn shelf_mut(&mut self, kind: ShelfKind) -> &mut Shelf {
        match kind {
            ShelfKind::NowPlaying => &mut self.now_playing,
            ShelfKind::Upcoming => &mut self.upcoming,
        }
    }

    fn apply(
        &mut self,
        kind: ShelfKind,
        result: Result<MoviesPage, ProviderError>,
        store: fn(&mut Shelf, &MoviesPage, Vec<Movie>),
    ) {
        let outcome = result.and_then(|page| {
            let movies = map_page(&page, &self.images)?;
            Ok((page, movies))
        });

        match outcome {
            Ok((page, movies)) => store(self.shelf_mut(kind), &page, movies),
            Err(err) => {
                tracing::warn!("{:?} fetch failed: {}", kind, err);
                self.shelf_mut(kind).phase = ShelfPhase::Failed;
                self.error_message = err.to_string();
            }
        }
    }
}

/// Shape every record on a page for display. A record that fails mapping
/// fails the whole page.
fn map_page(page: &MoviesPage, images: &ImageUrls) -> Result<Vec<Movie>, ProviderError> {
    page.results
        .iter()
        .map(|record| Movie::from_record(record, images).map_err(ProviderError::from))
        .collect()
}
