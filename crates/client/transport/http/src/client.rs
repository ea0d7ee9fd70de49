//! reqwest-backed [`Transport`] implementation.

use async_trait::async_trait;
use client_transport_core::{Transport, TransportError};
use game_protocol::{GameInfo, Message, Player, ResultFrame};
use reqwest::{Response, StatusCode};
use url::Url;

use crate::config::HttpConfig;

/// HTTP client for the game server.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    /// Build a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be constructed.
    pub fn new(config: HttpConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TransportError::ConfigError(e.to_string()))?;

        Ok(Self {
            http,
            base: config.server_url,
        })
    }

    fn endpoint(&self, segments: &[&str], player: Option<Player>) -> Result<Url, TransportError> {
        build_endpoint(&self.base, segments, player)
    }
}

fn build_endpoint(
    base: &Url,
    segments: &[&str],
    player: Option<Player>,
) -> Result<Url, TransportError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| TransportError::ConfigError(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);

    if let Some(player) = player {
        url.query_pairs_mut()
            .append_pair("player", player_param(player));
    }

    Ok(url)
}

fn player_param(player: Player) -> &'static str {
    match player {
        Player::Player1 => "Player1",
        Player::Player2 => "Player2",
    }
}

fn network(e: reqwest::Error) -> TransportError {
    TransportError::NetworkError(e.to_string())
}

async fn ensure_success(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(TransportError::Rejected {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn init(&self) -> Result<GameInfo, TransportError> {
        let url = self.endpoint(&["games"], None)?;
        tracing::debug!(%url, "Joining session");

        let response = self.http.post(url).send().await.map_err(network)?;
        let response = ensure_success(response).await?;

        response
            .json::<GameInfo>()
            .await
            .map_err(|e| TransportError::SerializationError(e.to_string()))
    }

    async fn poll(&self, info: &GameInfo) -> Result<Option<ResultFrame>, TransportError> {
        let url = self.endpoint(&["games", &info.id, "results"], Some(info.player))?;

        let response = self.http.get(url).send().await.map_err(network)?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let response = ensure_success(response).await?;

        let bytes = response.bytes().await.map_err(network)?;
        if bytes.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice::<Option<ResultFrame>>(&bytes)
            .map_err(|e| TransportError::SerializationError(e.to_string()))
    }

    async fn update(&self, message: &Message, info: &GameInfo) -> Result<(), TransportError> {
        let url = self.endpoint(&["games", &info.id, "messages"], Some(info.player))?;
        tracing::debug!(tag = message.tag(), "Sending {}", message.name());

        let response = self
            .http
            .post(url)
            .json(message)
            .send()
            .await
            .map_err(network)?;
        ensure_success(response).await?;

        Ok(())
    }
}
