//! HTTP endpoints for the local OAuth callback server.
//!
//! The CLI spins up a short-lived axum server during `hot100cli auth` so the
//! Spotify authorization flow has somewhere to land:
//!
//! - [`callback`] completes the authorization-code exchange when Spotify
//!   redirects back with a code, storing the resulting token in shared state.
//! - [`health`] is a trivial liveness endpoint, handy when checking that the
//!   callback server actually bound to the configured address.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
