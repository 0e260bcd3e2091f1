pub mod auth;
pub mod types;

pub use auth::Authorization;
pub use types::{Achievement, GameExtended};

use std::time::Duration as StdDuration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, instrument, warn};

const BASE_URL: &str = "https://retroachievements.org/API";
const USER_AGENT: &str = concat!("RaGuide/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("authorization rejected; check your RetroAchievements web API key")]
    Unauthorized,
    #[error("unexpected status code: {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: StdDuration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: StdDuration::from_secs(15),
        }
    }
}

/// Thin client for the RetroAchievements web API.
///
/// Every call carries the caller's [`Authorization`]; the client itself holds
/// no credentials and keeps no response state.
#[derive(Debug)]
pub struct RaClient {
    http: Client,
    config: ClientConfig,
}

impl Default for RaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RaClient {
    pub fn with_config(config: ClientConfig) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .expect("failed to build reqwest client");
        Self { http, config }
    }

    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch the extended game record, including its full achievement list.
    #[instrument(name = "ra_client.get_game_extended", skip(self, authorization))]
    pub async fn get_game_extended(
        &self,
        authorization: &Authorization,
        game_id: u32,
    ) -> Result<GameExtended> {
        let game: GameExtended = self
            .fetch_json(
                "API_GetGameExtended.php",
                authorization,
                &[("i", game_id.to_string())],
            )
            .await?;
        debug!(
            game_id,
            achievements = game.achievements.len(),
            "fetched extended game record"
        );
        Ok(game)
    }

    async fn fetch_json<T>(
        &self,
        endpoint: &str,
        authorization: &Authorization,
        params: &[(&str, String)],
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);

        let response = self
            .http
            .get(&url)
            .query(&authorization.query_pairs())
            .query(params)
            .send()
            .await
            .map_err(|err| ClientError::Http(err.to_string()))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(url, "RetroAchievements rejected the supplied credentials");
                return Err(ClientError::Unauthorized.into());
            }
            status => {
                warn!(status = %status, url, "RetroAchievements request failed");
                return Err(ClientError::Status(status).into());
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ClientError::Http(err.to_string()))?;
        let value = serde_json::from_slice::<T>(&bytes)
            .with_context(|| format!("failed to parse json from {url}"))?;
        Ok(value)
    }
}
