use chrono::Local;
use tabled::Table;

use crate::{billboard, config::Config, error, types::ChartTableRow, utils, warning};

/// Fetches the Hot 100 chart for a date and prints it as a table.
///
/// No Spotify interaction; useful for checking what a `playlist` run for the
/// same date would try to resolve.
pub async fn chart(config: &Config, date: Option<String>) {
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

    let entries = match billboard::fetch_chart(config, date).await {
        Ok(entries) => entries,
        Err(e) => error!("Failed to fetch chart for {}: {}", date, e),
    };

    if entries.is_empty() {
        warning!(
            "No song titles found on the chart page for {}. The chart markup may have changed.",
            date
        );
        return;
    }

    let table_rows: Vec<ChartTableRow> = entries
        .into_iter()
        .map(|entry| ChartTableRow {
            position: entry.position,
            title: entry.title,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
