//! REST client for the character store.
//!
//! Wraps the collection endpoints (`GET`/`POST {api_url}`,
//! `PUT`/`DELETE {api_url}/{id}`) using [`reqwest`].

use async_trait::async_trait;
use marvel_core::character::Character;
use marvel_core::draft::Draft;
use marvel_core::types::CharacterId;

use crate::config::ClientConfig;
use crate::store::CharacterStore;

/// HTTP client for a single character collection.
#[derive(Debug, Clone)]
pub struct HttpCharacterStore {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the character store REST layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code.
    #[error("Character store error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("Invalid response from character store: {0}")]
    Decode(String),
}

impl HttpCharacterStore {
    /// Create a client from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, StoreError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, config.api_url.clone()))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Collection URL this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn item_url(&self, id: CharacterId) -> String {
        format!("{}/{}", self.api_url, id)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`StoreError::Api`] containing
    /// the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CharacterStore for HttpCharacterStore {
    async fn list(&self) -> Result<Vec<Character>, StoreError> {
        let response = self.client.get(&self.api_url).send().await?;
        let characters: Vec<Character> = Self::parse_response(response).await?;
        tracing::debug!(count = characters.len(), "Fetched characters");
        Ok(characters)
    }

    async fn create(&self, draft: &Draft) -> Result<Character, StoreError> {
        let response = self.client.post(&self.api_url).json(draft).send().await?;
        let created: Character = Self::parse_response(response).await?;
        tracing::info!(id = created.id, name = %created.name, "Created character");
        Ok(created)
    }

    async fn update(&self, id: CharacterId, draft: &Draft) -> Result<Character, StoreError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(draft)
            .send()
            .await?;
        let updated: Character = Self::parse_response(response).await?;
        tracing::info!(id, name = %updated.name, "Updated character");
        Ok(updated)
    }

    async fn delete(&self, id: CharacterId) -> Result<(), StoreError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        Self::ensure_success(response).await?;
        tracing::info!(id, "Deleted character");
        Ok(())
    }
}
