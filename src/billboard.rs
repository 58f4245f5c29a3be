//! Chart page retrieval and title extraction.
//!
//! The Billboard Hot 100 has no public API; this module fetches the rendered
//! chart page for a date and scrapes the song titles out of the markup. The
//! extraction is keyed to the presentational class string Billboard uses for
//! the song-title label, which is an external UI contract that can change
//! without notice -- when it does, extraction yields zero titles and the
//! caller is expected to surface that instead of writing anything to Spotify.

use chrono::NaiveDate;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::{config::Config, types::ChartEntry};

/// CSS selector matching the song-title element on the chart page.
const TITLE_SELECTOR: &str = ".chart-element__information__song.text--truncate.color--primary";

/// Fetches the Hot 100 chart page for a date and extracts the song titles.
///
/// Issues a single GET against
/// `{chart_base_url}/charts/hot-100/{YYYY-MM-DD}`. There is no retry; any
/// transport failure or non-success status is propagated to the caller,
/// which treats it as fatal.
///
/// # Returns
///
/// The extracted titles in chart order (position 1 first). An empty vector
/// means the markup contained no matching elements.
pub async fn fetch_chart(config: &Config, date: NaiveDate) -> Result<Vec<ChartEntry>, reqwest::Error> {
    let url = format!(
        "{base}/charts/hot-100/{date}",
        base = &config.chart_base_url,
        date = date.format("%Y-%m-%d")
    );

    let client = Client::new();
    let response = client.get(&url).send().await?.error_for_status()?;
    let body = response.text().await?;

    Ok(extract_titles(&body))
}

/// Extracts chart entries from a chart page document.
///
/// Every element carrying the song-title class signature contributes one
/// entry, in document order, which on this page is chart rank order. The
/// element text is taken verbatim apart from surrounding whitespace;
/// duplicate titles are preserved.
pub fn extract_titles(html: &str) -> Vec<ChartEntry> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(TITLE_SELECTOR).expect("valid constant selector");

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .enumerate()
        .map(|(i, title)| ChartEntry {
            position: i + 1,
            title,
        })
        .collect()
}
