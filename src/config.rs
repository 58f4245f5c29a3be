//! Configuration management for the Hot 100 playlist CLI.
//!
//! This module handles loading configuration from environment variables and
//! `.env` files. All runtime parameters are collected once at startup into an
//! immutable [`Config`] value that is passed explicitly into every component,
//! so no piece of the pipeline reads process-wide state on its own.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (for everything except the Spotify credentials)

use dotenv;
use std::{env, path::PathBuf};

/// Immutable application configuration, constructed once at startup.
///
/// The two Spotify credentials are mandatory; every other field falls back
/// to a default when the corresponding environment variable is absent.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client ID (`SPOTIFY_CLIENT_ID`).
    pub client_id: String,
    /// Spotify application client secret (`SPOTIFY_CLIENT_SECRET`).
    pub client_secret: String,
    /// Base URL of the Spotify Web API (`SPOTIFY_API_URL`).
    pub api_url: String,
    /// Spotify OAuth authorization endpoint (`SPOTIFY_API_AUTH_URL`).
    pub auth_url: String,
    /// Spotify OAuth token exchange endpoint (`SPOTIFY_API_TOKEN_URL`).
    pub token_url: String,
    /// OAuth scope requested during authorization (`SPOTIFY_API_AUTH_SCOPE`).
    pub scope: String,
    /// OAuth redirect URI registered with the Spotify app (`SPOTIFY_API_REDIRECT_URI`).
    pub redirect_uri: String,
    /// Bind address for the local OAuth callback server (`SERVER_ADDRESS`).
    pub server_addr: String,
    /// Base URL of the chart service (`CHART_BASE_URL`).
    pub chart_base_url: String,
}

impl Config {
    /// Builds a [`Config`] from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the missing variable if `SPOTIFY_CLIENT_ID`
    /// or `SPOTIFY_CLIENT_SECRET` is not set. This is the one precondition
    /// checked before any pipeline work starts; all other variables have
    /// working defaults.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env()?;
    /// println!("Chart service: {}", config.chart_base_url);
    /// ```
    pub fn from_env() -> Result<Self, String> {
        let client_id = require("SPOTIFY_CLIENT_ID")?;
        let client_secret = require("SPOTIFY_CLIENT_SECRET")?;

        Ok(Config {
            client_id,
            client_secret,
            api_url: or_default("SPOTIFY_API_URL", "https://api.spotify.com/v1"),
            auth_url: or_default(
                "SPOTIFY_API_AUTH_URL",
                "https://accounts.spotify.com/authorize",
            ),
            token_url: or_default(
                "SPOTIFY_API_TOKEN_URL",
                "https://accounts.spotify.com/api/token",
            ),
            scope: or_default("SPOTIFY_API_AUTH_SCOPE", "playlist-modify-private"),
            redirect_uri: or_default(
                "SPOTIFY_API_REDIRECT_URI",
                "http://127.0.0.1:8080/callback",
            ),
            server_addr: or_default("SERVER_ADDRESS", "127.0.0.1:8080"),
            chart_base_url: or_default("CHART_BASE_URL", "https://www.billboard.com"),
        })
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| {
        format!(
            "Please save your Spotify credentials as {} (see .env.example in the local data directory).",
            name
        )
    })
}

fn or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `hot100cli/.env`. Variables already present in
/// the process environment take precedence.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/hot100cli/.env`
/// - macOS: `~/Library/Application Support/hot100cli/.env`
/// - Windows: `%LOCALAPPDATA%/hot100cli/.env`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or an existing
/// `.env` file cannot be parsed. A missing `.env` file is not an error; the
/// credentials may be supplied through the environment directly.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("hot100cli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
