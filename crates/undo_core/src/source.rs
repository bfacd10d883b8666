//! Startup data source for the undo list.

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::ListItem,
    protocol::{UndoListResponse, UNDO_LIST_PATH},
};
use thiserror::Error;
use tracing::{error, info};
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to reach {url}: {source}")]
    Transport { url: String, source: reqwest::Error },
    #[error("{url} returned error status: {source}")]
    Status { url: String, source: reqwest::Error },
    #[error("invalid undo list payload from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },
}

#[async_trait]
pub trait ListSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<ListItem>, FetchError>;
}

/// Fetches the list with one GET to [`UNDO_LIST_PATH`] under a base url.
#[derive(Debug, Clone)]
pub struct HttpListSource {
    client: Client,
    url: Url,
}

impl HttpListSource {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(base_url)
            .and_then(|base| base.join(UNDO_LIST_PATH))
            .map_err(|source| FetchError::InvalidBaseUrl {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ListSource for HttpListSource {
    async fn fetch(&self) -> Result<Vec<ListItem>, FetchError> {
        let url = self.url.to_string();
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?
            .error_for_status()
            .map_err(|source| FetchError::Status {
                url: url.clone(),
                source,
            })?;

        let body: UndoListResponse = response
            .json()
            .await
            .map_err(|source| FetchError::Decode { url, source })?;
        Ok(body.data)
    }
}

/// A fixed list, used offline and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticListSource(pub Vec<ListItem>);

#[async_trait]
impl ListSource for StaticListSource {
    async fn fetch(&self) -> Result<Vec<ListItem>, FetchError> {
        Ok(self.0.clone())
    }
}

/// Fetches the startup list once. Failures are logged and yield an empty
/// list; there is no retry.
pub async fn load_initial_items(source: &dyn ListSource) -> Vec<ListItem> {
    match source.fetch().await {
        Ok(items) => {
            info!(len = items.len(), "loaded undo list");
            items
        }
        Err(err) => {
            error!(%err, "failed to load undo list; starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
