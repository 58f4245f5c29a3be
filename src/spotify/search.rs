use std::time::Duration;

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{
    config::Config,
    types::{ChartEntry, ResolvedTrack, SearchTracksResponse},
    utils,
};

/// Resolves one chart title to a Spotify track URI.
///
/// Issues a single search request scoped by the title text and the release
/// year of the chart date (`q=track:{title} year:{year}`, `type=track`,
/// `limit=1`) and takes the first result.
///
/// # Returns
///
/// - `Ok(Some(ResolvedTrack))` - the first matching track's URI, paired with
///   the originating title
/// - `Ok(None)` - the result set was empty; the caller reports the miss and
///   moves on
/// - `Err(reqwest::Error)` - transport or API fault, treated as fatal by the
///   caller
///
/// # Example
///
/// ```
/// let resolved = search_track(&config, &token, "Mack The Knife", date).await?;
/// if let Some(track) = resolved {
///     println!("{} -> {}", track.title, track.uri);
/// }
/// ```
pub async fn search_track(
    config: &Config,
    token: &str,
    title: &str,
    date: NaiveDate,
) -> Result<Option<ResolvedTrack>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = &config.api_url);
    let query = utils::build_search_query(title, date);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchTracksResponse>().await?;

    Ok(res.tracks.items.first().map(|track| ResolvedTrack {
        uri: track.uri.clone(),
        title: title.to_string(),
    }))
}

/// Resolves a list of chart entries to track URIs, one search per entry,
/// sequentially and in chart order.
///
/// Entries whose result set is empty are collected as misses and dropped
/// from the resolved list, so the output is at most as long as the input
/// and matched entries keep their relative order.
///
/// # Errors
///
/// The first transport or API fault aborts resolution; only the empty
/// result set is recovered locally.
pub async fn resolve_titles(
    config: &Config,
    token: &str,
    entries: &[ChartEntry],
    date: NaiveDate,
) -> Result<(Vec<ResolvedTrack>, Vec<ChartEntry>), reqwest::Error> {
    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_message("Resolving titles on Spotify...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:40}] {pos}/{len}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut resolved: Vec<ResolvedTrack> = Vec::new();
    let mut misses: Vec<ChartEntry> = Vec::new();

    for entry in entries {
        match search_track(config, token, &entry.title, date).await {
            Ok(Some(track)) => resolved.push(track),
            Ok(None) => misses.push(entry.clone()),
            Err(err) => {
                pb.finish_and_clear();
                return Err(err);
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok((resolved, misses))
}
