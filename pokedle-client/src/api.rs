use std::time::Duration;

use async_trait::async_trait;
use pokedle_types::{GuessRequest, GuessResponse, HintsUnlockResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;

/// The two game server endpoints the page talks to.
#[async_trait]
pub trait GuessApi: Send + Sync {
    /// `POST /api/guess`
    async fn submit_guess(&self, request: &GuessRequest) -> Result<GuessResponse, ApiError>;

    /// `GET /api/hints`
    async fn fetch_hints(&self) -> Result<HintsUnlockResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpGuessApi {
    client: Client,
    base_url: String,
}

impl HttpGuessApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GuessApi for HttpGuessApi {
    async fn submit_guess(&self, request: &GuessRequest) -> Result<GuessResponse, ApiError> {
        let url = self.url("/api/guess");
        debug!("POST {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let response_url = response.url().to_string();
        let bytes = response.bytes().await?;

        // Rejections may come back with an error status; the body still decides
        let body: GuessResponse = match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    url: response_url,
                });
            }
            Err(e) => {
                return Err(ApiError::Decode {
                    message: e.to_string(),
                });
            }
        };
        if !status.is_success() {
            debug!(status = status.as_u16(), "guess response carried an error status");
        }

        debug!(
            ok = body.ok,
            correct = body.correct,
            guess_counter = body.guess_counter,
            "guess response received"
        );
        Ok(body)
    }

    async fn fetch_hints(&self) -> Result<HintsUnlockResponse, ApiError> {
        let url = self.url("/api/hints");
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let body: HintsUnlockResponse = Self::decode(response).await?;

        debug!(
            description = body.description.is_some(),
            types = body.types.is_some(),
            cry = body.cry.is_some(),
            "hint unlocks received"
        );
        Ok(body)
    }
}
