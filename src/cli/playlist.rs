use chrono::Local;

use crate::{
    billboard, config::Config, error, info, management::TokenManager, spotify, success, utils,
    warning,
};

/// Creates a private playlist from the Hot 100 chart of a date.
///
/// The full pipeline: validated date (from the flag or the interactive
/// prompt), chart fetch, sequential per-title resolution against the Spotify
/// search endpoint, playlist creation and one bulk track-add. Titles without
/// a match are reported and skipped; every other remote fault is fatal.
pub async fn playlist(config: &Config, date: Option<String>) {
    let today = Local::now().date_naive();

    let date = match date {
        Some(input) => match utils::validate_chart_date(&input, today) {
            Ok(date) => date,
            Err(msg) => error!("{}", msg),
        },
        None => match utils::read_chart_date(today) {
            Some(date) => date,
            None => error!("No date given, aborting."),
        },
    };

    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run hot100cli auth\n Error: {}",
                e
            );
        }
    };

    info!("Fetching Hot 100 chart for {}...", date);
    let entries = match billboard::fetch_chart(config, date).await {
        Ok(entries) => entries,
        Err(e) => error!("Failed to fetch chart for {}: {}", date, e),
    };

    if entries.is_empty() {
        warning!(
            "No song titles found on the chart page for {}. The chart markup may have changed; nothing was created.",
            date
        );
        return;
    }
    success!("Found {} chart entries.", entries.len());

    let token = token_mgr.get_valid_token(config).await;
    let (resolved, misses) =
        match spotify::search::resolve_titles(config, &token, &entries, date).await {
            Ok(result) => result,
            Err(e) => error!("Track search failed: {}", e),
        };

    for miss in &misses {
        warning!("Song '{}' not found on Spotify, skipped.", miss.title);
    }
    success!("Resolved {} of {} titles.", resolved.len(), entries.len());

    let user = match spotify::playlist::current_user(config, &token).await {
        Ok(user) => user,
        Err(e) => error!("Failed to fetch the authenticated user: {}", e),
    };

    let name = utils::playlist_name(date);
    let created = match spotify::playlist::create(config, &token, &user.id, name.clone()).await {
        Ok(resp) => resp,
        Err(e) => error!("Failed to create playlist '{}': {}", name, e),
    };

    if resolved.is_empty() {
        warning!("No titles resolved; playlist '{}' was left empty.", name);
        return;
    }

    let uris: Vec<String> = resolved.into_iter().map(|track| track.uri).collect();
    let track_count = uris.len();
    match spotify::playlist::add_tracks(config, &token, &created.id, uris).await {
        Ok(_) => success!(
            "Playlist '{}' created with {} tracks ({} skipped).",
            name,
            track_count,
            misses.len()
        ),
        Err(e) => error!("Failed to add tracks to playlist '{}': {}", name, e),
    }
}
