use reqwest::Client;

use crate::{
    config::Config,
    types::{
        AddTracksToPlaylistRequest, AddTracksToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, CurrentUserResponse,
    },
};

/// Fetches the authenticated user's profile.
///
/// Playlists are created under the account that authorized the application;
/// this resolves its user id via `GET /me`.
pub async fn current_user(
    config: &Config,
    token: &str,
) -> Result<CurrentUserResponse, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config.api_url);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CurrentUserResponse>().await
}

/// Creates a new private playlist owned by the given user.
///
/// One create call per run; there is no dedup against playlists from earlier
/// runs, so repeating a date yields a second playlist with the same name.
pub async fn create(
    config: &Config,
    token: &str,
    user_id: &str,
    name: String,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config.api_url,
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name,
        public: false,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Adds track URIs to a playlist in one bulk call, preserving order.
///
/// The Hot 100 never exceeds the API's 100-URI limit for this endpoint, so a
/// single request always suffices.
pub async fn add_tracks(
    config: &Config,
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<AddTracksToPlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config.api_url,
        playlist_id = playlist_id
    );

    let body = AddTracksToPlaylistRequest { uris };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTracksToPlaylistResponse>().await
}
