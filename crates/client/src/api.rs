//! Reqwest adapter for the knights backend.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use knights_domain::{Knight, KnightId, Nickname, Weapon};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::ports::KnightsApi;

/// HTTP client for the knights backend.
#[derive(Debug, Clone)]
pub struct HttpKnightsApi {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct NicknamePatch<'a> {
    nickname: &'a str,
}

impl HttpKnightsApi {
    /// Create a client for the configured backend with a 30 second timeout.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_timeout(config, 30)
    }

    /// Create a client with a custom timeout (for testing).
    pub fn with_timeout(config: &ApiConfig, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url().to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success status to `ApiError::Status`, keeping the body
    /// for the caller's error display.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode_knight(response: Response) -> Result<Knight, ApiError> {
        Self::check(response)
            .await?
            .json::<Knight>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

impl Default for HttpKnightsApi {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}

#[async_trait]
impl KnightsApi for HttpKnightsApi {
    async fn list_knights(&self) -> Result<Vec<Knight>, ApiError> {
        debug!("listing knights");
        let response = self.client.get(self.url("/knights")).send().await?;
        Self::check(response)
            .await?
            .json::<Vec<Knight>>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn get_knight(&self, id: KnightId) -> Result<Knight, ApiError> {
        debug!(%id, "fetching knight");
        let response = self
            .client
            .get(self.url(&format!("/knights/{id}")))
            .send()
            .await?;
        Self::decode_knight(response).await
    }

    async fn create_knight(&self, knight: &Knight) -> Result<Knight, ApiError> {
        debug!(id = %knight.id(), "creating knight");
        let response = self
            .client
            .post(self.url("/knights"))
            .json(knight)
            .send()
            .await?;
        Self::decode_knight(response).await
    }

    async fn update_nickname(
        &self,
        id: KnightId,
        nickname: &Nickname,
    ) -> Result<Knight, ApiError> {
        debug!(%id, nickname = nickname.as_str(), "updating nickname");
        let response = self
            .client
            .patch(self.url(&format!("/knights/{id}")))
            .json(&NicknamePatch {
                nickname: nickname.as_str(),
            })
            .send()
            .await?;
        Self::decode_knight(response).await
    }

    async fn delete_knight(&self, id: KnightId) -> Result<(), ApiError> {
        debug!(%id, "deleting knight");
        let response = self
            .client
            .delete(self.url(&format!("/knights/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn add_weapon(&self, id: KnightId, weapon: &Weapon) -> Result<Knight, ApiError> {
        debug!(%id, weapon = weapon.name().as_str(), "adding weapon");
        let response = self
            .client
            .post(self.url(&format!("/knights/{id}/weapons")))
            .json(weapon)
            .send()
            .await?;
        Self::decode_knight(response).await
    }
}
