//! # CLI Module
//!
//! User-facing command implementations. Each function backs one clap
//! subcommand and coordinates the configuration, Spotify and chart layers:
//!
//! - [`auth`] - Spotify OAuth authorization flow (PKCE)
//! - [`chart`] - fetch a Hot 100 chart and render it as a table
//! - [`playlist`] - the full pipeline: validated date, chart fetch, per-title
//!   track resolution, playlist creation and population
//!
//! The commands own all user interaction: the interactive date prompt, the
//! progress bar during resolution, miss notices for titles without a Spotify
//! match, and the fatal-error exits on transport or configuration faults.

mod auth;
mod chart;
mod playlist;

pub use auth::auth;
pub use chart::chart;
pub use playlist::playlist;
