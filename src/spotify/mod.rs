//! # Spotify Integration Module
//!
//! The integration layer between the CLI and the Spotify Web API. Each
//! submodule covers one domain of the API surface the application needs:
//!
//! - [`auth`] - OAuth 2.0 authorization-code flow with PKCE: code verifier
//!   and challenge generation, the local callback server handoff, token
//!   exchange and refresh.
//! - [`search`] - Track search, used to resolve a chart title plus release
//!   year to a track URI. First result wins; an empty result set is a miss,
//!   not an error.
//! - [`playlist`] - Current-user lookup, playlist creation and the bulk
//!   track-add call.
//!
//! ## Covered endpoints
//!
//! - `GET /search` - resolve a title to a track URI
//! - `GET /me` - owning account for created playlists
//! - `POST /users/{user_id}/playlists` - create the private playlist
//! - `POST /playlists/{playlist_id}/tracks` - add resolved tracks in order
//! - `POST /api/token` - token exchange and refresh (accounts service)
//!
//! ## Error handling
//!
//! Functions return `Result` with `reqwest::Error` (HTTP and transport) or
//! `String` (token management). There is deliberately no retry or rate-limit
//! handling: apart from the search miss, every remote fault propagates and
//! terminates the run.

pub mod auth;
pub mod playlist;
pub mod search;
