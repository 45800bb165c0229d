//! Home-screen state machine behaviour against a scripted provider.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use marquee_core::{HomeScreen, MovieProvider, ProviderError, ShelfKind, ShelfPhase};
use marquee_model::{MovieRecord, MoviesPage};

type Scripted = Result<MoviesPage, ProviderError>;

/// Provider double serving queued responses per shelf. Panics when the
/// screen issues a request the script did not anticipate, which is itself
/// an assertion for the no-more-pages guard.
struct ScriptedProvider {
    now_playing: Mutex<VecDeque<Scripted>>,
    upcoming: Mutex<VecDeque<Scripted>>,
}

impl ScriptedProvider {
    fn new(now_playing: Vec<Scripted>, upcoming: Vec<Scripted>) -> Self {
        Self {
            now_playing: Mutex::new(now_playing.into()),
            upcoming: Mutex::new(upcoming.into()),
        }
    }
}

#[async_trait]
impl MovieProvider for ScriptedProvider {
    async fn now_playing(&self, _page: u32) -> Scripted {
        self.now_playing
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted now-playing request")
    }

    async fn upcoming(&self, _page: u32) -> Scripted {
        self.upcoming
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted upcoming request")
    }
}

fn records(count: usize) -> Vec<MovieRecord> {
    (0..count)
        .map(|index| MovieRecord {
            id: index as u64,
            title: "title".to_string(),
            backdrop_path: Some("/backdrop".to_string()),
            poster_path: Some("/poster".to_string()),
            overview: "overview".to_string(),
            vote_average: 1.0,
            release_date: "2020-03-05".to_string(),
        })
        .collect()
}

fn page(number: u32, total_pages: u32, count: usize) -> MoviesPage {
    MoviesPage {
        page: number,
        total_pages,
        total_results: count as u64,
        results: records(count),
    }
}

fn api_error() -> ProviderError {
    ProviderError::Api("service unavailable".to_string())
}

#[tokio::test]
async fn successful_load_populates_both_shelves() {
    let provider = ScriptedProvider::new(vec![Ok(page(1, 10, 20))], vec![Ok(page(1, 10, 25))]);
    let mut screen = HomeScreen::new(provider);

    screen.load().await;

    assert_eq!(screen.now_playing().len(), 20);
    assert_eq!(screen.upcoming().len(), 25);
    assert_eq!(screen.now_playing().phase(), ShelfPhase::Loaded);
    assert_eq!(screen.upcoming().phase(), ShelfPhase::Loaded);
    assert!(screen.error_message().is_empty());
}

#[tokio::test]
async fn failed_load_leaves_shelves_empty_and_surfaces_the_message() {
    let provider = ScriptedProvider::new(vec![Err(api_error())], vec![Err(api_error())]);
    let mut screen = HomeScreen::new(provider);

    screen.load().await;

    assert!(screen.now_playing().is_empty());
    assert!(screen.upcoming().is_empty());
    assert_eq!(screen.now_playing().phase(), ShelfPhase::Failed);
    assert_eq!(screen.upcoming().phase(), ShelfPhase::Failed);
    assert_eq!(screen.error_message(), api_error().to_string());
}

#[tokio::test]
async fn sibling_failure_preserves_the_successful_shelf() {
    let provider = ScriptedProvider::new(vec![Ok(page(1, 10, 20))], vec![Err(api_error())]);
    let mut screen = HomeScreen::new(provider);

    screen.load().await;

    assert_eq!(screen.now_playing().len(), 20);
    assert_eq!(screen.now_playing().phase(), ShelfPhase::Loaded);
    assert!(screen.upcoming().is_empty());
    assert_eq!(screen.upcoming().phase(), ShelfPhase::Failed);
    assert_eq!(screen.error_message(), api_error().to_string());
}

#[tokio::test]
async fn concurrent_failures_keep_the_last_written_message() {
    let provider = ScriptedProvider::new(
        vec![Err(ProviderError::Api("now-playing down".to_string()))],
        vec![Err(ProviderError::Api("upcoming down".to_string()))],
    );
    let mut screen = HomeScreen::new(provider);

    screen.load().await;

    // Results are applied now-playing first, so the upcoming failure wins
    // the shared slot.
    assert_eq!(screen.error_message(), "API error: upcoming down");
}

#[tokio::test]
async fn pagination_appends_to_one_shelf_only() {
    let provider = ScriptedProvider::new(
        vec![Ok(page(1, 10, 20)), Ok(page(2, 10, 20))],
        vec![Ok(page(1, 10, 30)), Ok(page(2, 10, 30))],
    );
    let mut screen = HomeScreen::new(provider);

    screen.load().await;
    screen.load_next_page(ShelfKind::Upcoming).await;

    assert_eq!(screen.now_playing().len(), 20);
    assert_eq!(screen.upcoming().len(), 60);
    assert_eq!(screen.upcoming().page(), 2);
    assert!(screen.error_message().is_empty());
}

#[tokio::test]
async fn pagination_stops_once_pages_are_exhausted() {
    // Scripts hold page 1 only; a second request would panic the double.
    let provider = ScriptedProvider::new(vec![Ok(page(1, 1, 20))], vec![Ok(page(1, 1, 30))]);
    let mut screen = HomeScreen::new(provider);

    screen.load().await;
    screen.load_next_page(ShelfKind::Upcoming).await;
    screen.load_next_page(ShelfKind::NowPlaying).await;

    assert_eq!(screen.now_playing().len(), 20);
    assert_eq!(screen.upcoming().len(), 30);
    assert!(screen.error_message().is_empty());
}

#[tokio::test]
async fn pagination_before_load_is_a_no_op() {
    let provider = ScriptedProvider::new(vec![], vec![]);
    let mut screen = HomeScreen::new(provider);

    screen.load_next_page(ShelfKind::Upcoming).await;

    assert!(screen.upcoming().is_empty());
    assert_eq!(screen.upcoming().phase(), ShelfPhase::Idle);
}

#[tokio::test]
async fn failed_next_page_keeps_existing_records() {
    let provider = ScriptedProvider::new(
        vec![Ok(page(1, 10, 20))],
        vec![Ok(page(1, 10, 30)), Err(api_error())],
    );
    let mut screen = HomeScreen::new(provider);

    screen.load().await;
    screen.load_next_page(ShelfKind::Upcoming).await;

    assert_eq!(screen.upcoming().len(), 30);
    assert_eq!(screen.upcoming().phase(), ShelfPhase::Failed);
    assert_eq!(screen.error_message(), api_error().to_string());
}

#[tokio::test]
async fn malformed_release_date_fails_the_shelf_loudly() {
    let mut bad_page = page(1, 10, 5);
    bad_page.results[3].release_date = "soon".to_string();
    let provider = ScriptedProvider::new(vec![Ok(page(1, 10, 20))], vec![Ok(bad_page)]);
    let mut screen = HomeScreen::new(provider);

    screen.load().await;

    assert_eq!(screen.now_playing().len(), 20);
    assert!(screen.upcoming().is_empty());
    assert_eq!(screen.upcoming().phase(), ShelfPhase::Failed);
    assert!(screen.error_message().starts_with("invalid release date"));
}
