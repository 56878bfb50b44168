//! HTTP client wrapper for the document store.
//!
//! Exposes the store's four operations (create/delete index, insert
//! document, search) and nothing else. `search` hands back the raw response
//! document so reduction stays in [`crate::query`]. There is no retry or
//! backoff: the assumed deployment is a local, same-machine store, and any
//! failure is terminal for the scenario that issued the call.

use serde::Serialize;
use serde_json::Value;

use crate::config::StoreConfig;
use crate::error::{DashmatchError, Result};
use crate::query::{self, SearchRequest};
use crate::settings::IndexBody;
use crate::types::UserRecord;

pub struct StoreClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(StoreConfig::new(base_url))
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Client configured from `DASHMATCH_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_config(StoreConfig::from_env()?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `PUT /{index}`: create an index with the given analysis settings
    /// and field mappings.
    pub async fn create_index(&self, index: &str, body: &IndexBody) -> Result<()> {
        let url = format!("{}/{}", self.base_url, index);
        tracing::debug!(index, "creating index");

        let response = self.http_client.put(&url).json(body).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// `DELETE /{index}`: remove the index and all its documents.
    pub async fn delete_index(&self, index: &str) -> Result<()> {
        let url = format!("{}/{}", self.base_url, index);
        tracing::debug!(index, "deleting index");

        let response = self.http_client.delete(&url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// `POST /{index}/_doc`: insert one record. Visibility timing is the
    /// store's; callers that query right after a batch of inserts wait for
    /// the store's refresh themselves.
    pub async fn insert_document<T: Serialize>(&self, index: &str, document: &T) -> Result<()> {
        let url = format!("{}/{}/_doc", self.base_url, index);
        tracing::debug!(index, "inserting document");

        let response = self.http_client.post(&url).json(document).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// `POST /{index}/_search`: run a query and return the raw response
    /// document. Reduce it with [`query::extract_hits`].
    pub async fn search(&self, index: &str, request: &SearchRequest) -> Result<Value> {
        let url = format!("{}/{}/_search", self.base_url, index);
        tracing::debug!(index, "searching");

        let response = self.http_client.post(&url).json(request).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Build a phrase-prefix query for `phrase`, run it, and reduce the
    /// response: [`query::build_query`] → [`Self::search`] →
    /// [`query::extract_hits`].
    pub async fn search_phrase(&self, index: &str, phrase: &str) -> Result<Vec<UserRecord>> {
        let response = self.search(index, &query::build_query(phrase)).await?;
        query::extract_hits(&response)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(%status, "store rejected request");
    Err(DashmatchError::StoreRejected { status, body })
}
