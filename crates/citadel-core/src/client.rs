//! HTTP client for the characters GraphQL endpoint.
//!
//! Wraps a single `POST` of the [`GET_CHARACTERS`](crate::query::GET_CHARACTERS)
//! document using [`reqwest`].

use std::future::Future;

use crate::config::GalleryConfig;
use crate::error::{GalleryError, GalleryResult};
use crate::query::{decode_characters_response, GraphQlRequest};
use crate::types::CharacterPage;

/// Anything that can produce a page of characters by page number.
///
/// The feed state machine is driven through this trait so it can be
/// exercised without a network.
pub trait PageSource {
    fn fetch_page(&self, page: u32) -> impl Future<Output = GalleryResult<CharacterPage>> + Send;
}

/// GraphQL client for a single endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphQlClient {
    /// Create a new client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(config.endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one page of the characters query.
    pub async fn characters(&self, page: u32) -> GalleryResult<CharacterPage> {
        tracing::debug!(page, endpoint = %self.endpoint, "Requesting characters page");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest::characters(page))
            .send()
            .await?;

        let body = Self::ensure_success(response).await?.text().await?;
        decode_characters_response(&body)
    }

    /// Return the response unchanged on a success status, or an
    /// [`GalleryError::Api`] carrying the status and body.
    async fn ensure_success(response: reqwest::Response) -> GalleryResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GalleryError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl PageSource for GraphQlClient {
    fn fetch_page(&self, page: u32) -> impl Future<Output = GalleryResult<CharacterPage>> + Send {
        self.characters(page)
    }
}
