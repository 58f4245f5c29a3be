use std::io::{self, BufRead, Write};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{Datelike, NaiveDate};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::warning;

/// Date of the first published Hot 100 chart; no chart exists before it.
pub fn oldest_chart_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1958, 10, 4).expect("valid constant date")
}

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Validates a chart date string.
///
/// The input must be a calendar date in canonical `YYYY-MM-DD` form and must
/// fall within `[1958-10-04, today)`, `today` exclusive, so yesterday is the
/// most recent acceptable chart.
///
/// # Errors
///
/// Returns a user-facing diagnostic string when the input does not parse or
/// falls outside the valid range.
pub fn validate_chart_date(input: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| "Please give a date in format YYYY-MM-DD.".to_string())?;

    // strptime is lenient about zero padding; insist on the canonical form
    if date.format("%Y-%m-%d").to_string() != input {
        return Err("Please give a date in format YYYY-MM-DD.".to_string());
    }

    if date < oldest_chart_date() || date >= today {
        return Err(
            "Date is too old or in the future. Choose a date between 1958-10-04 and yesterday. Try again."
                .to_string(),
        );
    }

    Ok(date)
}

/// Prompts on stdin for a chart date until a valid one is entered.
///
/// Invalid input prints a diagnostic and re-prompts. End of input (closed
/// stdin, Ctrl-D) is treated as an explicit cancellation and yields `None`
/// so the caller can abort instead of looping forever.
pub fn read_chart_date(today: NaiveDate) -> Option<NaiveDate> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("Date in format YYYY-MM-DD: ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return None, // end of input: cancel
            Ok(_) => {}
        }

        match validate_chart_date(line.trim(), today) {
            Ok(date) => return Some(date),
            Err(msg) => warning!("{}", msg),
        }
    }
}

/// Builds the Spotify search query for a chart title: the title itself plus
/// a release-year filter taken from the chart date.
pub fn build_search_query(title: &str, date: NaiveDate) -> String {
    format!("track:{} year:{}", title, date.year())
}

pub fn playlist_name(date: NaiveDate) -> String {
    format!("Top songs of {}", date.format("%Y-%m-%d"))
}
