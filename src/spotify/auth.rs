use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config::Config,
    error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{PkceToken, Token},
    utils, warning,
};

/// Runs the complete OAuth 2.0 authorization-code flow with PKCE.
///
/// The flow, end to end:
/// 1. Generate a PKCE code verifier and derive its SHA-256 challenge
/// 2. Start the local callback server
/// 3. Open the Spotify authorization URL in the user's browser (printing it
///    as a fallback when the browser cannot be launched)
/// 4. Wait for the callback handler to complete the token exchange
/// 5. Persist the obtained token for future runs
///
/// This is a one-time interactive authorization; subsequent commands use the
/// persisted token and the refresh flow in [`crate::management::TokenManager`].
///
/// # Arguments
///
/// * `config` - Application configuration (client credentials, endpoints)
/// * `shared_state` - State shared with the callback handler, carrying the
///   code verifier in and the exchanged token out
///
/// # Failure behavior
///
/// A failed browser launch degrades to a manual-URL warning. Token
/// persistence failures and an expired wait (60 s without a callback)
/// terminate the program.
pub async fn auth(config: &Config, shared_state: Arc<Mutex<Option<PkceToken>>>) {
    // generate PKCE verifier and challenge
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    // start API server
    let server_state = Arc::clone(&shared_state);
    let server_config = Arc::new(config.clone());
    tokio::spawn(async move {
        start_api_server(server_config, server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        auth_url = &config.auth_url,
        client_id = &config.client_id,
        redirect_uri = &config.redirect_uri,
        code_challenge = code_challenge,
        scope = &config.scope
    );

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: code_verifier.clone(),
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Polls the shared state for a completed token, up to 60 seconds.
///
/// Runs concurrently with the callback handler that populates the token
/// after a successful exchange. Returns `None` when the wait expires.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for an access token.
///
/// Final step of the flow: posts the code, the PKCE verifier and the
/// registered redirect URI to the token endpoint, authenticating with the
/// application's client id and secret.
///
/// # Errors
///
/// Propagates HTTP and decode errors from the token endpoint; an invalid or
/// already-used code surfaces here as a missing `access_token` field.
pub async fn exchange_code_pkce(
    config: &Config,
    code: &str,
    verifier: &str,
) -> Result<Token, reqwest::Error> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", &config.client_id),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", &config.redirect_uri),
        ])
        .send()
        .await?;

    let json: Value = res.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
