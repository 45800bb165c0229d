//! Minimal browse demo: load both lists, page the upcoming shelf once,
//! print what landed.

use marquee_core::{HomeScreen, ShelfKind, TmdbClient, TmdbConfig, telemetry};
use marquee_model::ImageUrls;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = TmdbConfig::from_env()?;
    let images = ImageUrls::new(config.image_base.clone());
    let mut screen = HomeScreen::with_images(TmdbClient::new(&config), images);

    screen.load().await;
    screen.load_next_page(ShelfKind::Upcoming).await;

    if !screen.error_message().is_empty() {
        anyhow::bail!("browse failed: {}", screen.error_message());
    }

    println!(
        "now playing: {} movies, upcoming: {} movies",
        screen.now_playing().len(),
        screen.upcoming().len()
    );
    for movie in screen.upcoming().movies().iter().take(5) {
        println!("  {} [{}]", movie.title, movie.release_date);
    }

    Ok(())
}
