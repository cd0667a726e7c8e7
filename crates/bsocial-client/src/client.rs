//! HTTP client for the bsocial index service: generic encoded queries,
//! fixed REST accessor routes, and transaction ingestion.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use bsocial_core::ProtocolRecord;
use bsocial_query::{encode_query, Collection, Query};

use crate::error::ClientError;
use crate::response::QueryResponse;

pub const DEFAULT_BASE_URL: &str = "https://bmap-api-production.up.railway.app";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration: base URL override and per-request timeout.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Request/response client for the index API.
pub struct IndexClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl IndexClient {
    /// Build a client. The underlying HTTP client carries no global
    /// timeout — subscriptions hold their connection open indefinitely —
    /// so one-shot requests apply the configured timeout per request.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { config, http })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn stream_url(&self, collection: Collection, query: &Query) -> Result<String, ClientError> {
        let token = encode_query(query)?;
        Ok(format!("{}/s/{collection}/{token}", self.config.base_url))
    }

    /// Execute an encoded query against `GET /q/{collection}/{token}` and
    /// normalize the response shape.
    pub async fn query(
        &self,
        collection: Collection,
        query: &Query,
    ) -> Result<Vec<ProtocolRecord>, ClientError> {
        let token = encode_query(query)?;
        let url = format!("{}/q/{collection}/{token}", self.config.base_url);
        let response: QueryResponse = self.get_json(&url).await?;
        Ok(response.into_records())
    }

    // Fixed REST accessor routes, all thin wrappers over the same
    // request/normalize path.

    pub async fn posts_by_bap_id(&self, bap_id: &str) -> Result<Vec<ProtocolRecord>, ClientError> {
        self.get_records(&format!(
            "{}/social/post/bap/{}",
            self.config.base_url,
            urlencoding::encode(bap_id)
        ))
        .await
    }

    /// Feed for a BAP ID: posts from identities it follows.
    pub async fn feed_by_bap_id(&self, bap_id: &str) -> Result<Vec<ProtocolRecord>, ClientError> {
        self.get_records(&format!(
            "{}/social/feed/{}",
            self.config.base_url,
            urlencoding::encode(bap_id)
        ))
        .await
    }

    pub async fn search_posts(&self, term: &str) -> Result<Vec<ProtocolRecord>, ClientError> {
        self.get_records(&format!(
            "{}/social/post/search?q={}",
            self.config.base_url,
            urlencoding::encode(term)
        ))
        .await
    }

    pub async fn likes_for_post(&self, txid: &str) -> Result<Vec<ProtocolRecord>, ClientError> {
        self.get_records(&format!(
            "{}/social/post/{}/like",
            self.config.base_url,
            urlencoding::encode(txid)
        ))
        .await
    }

    pub async fn likes_by_bap_id(&self, bap_id: &str) -> Result<Vec<ProtocolRecord>, ClientError> {
        self.get_records(&format!(
            "{}/social/bap/{}/like",
            self.config.base_url,
            urlencoding::encode(bap_id)
        ))
        .await
    }

    pub async fn friends_by_bap_id(&self, bap_id: &str) -> Result<Vec<ProtocolRecord>, ClientError> {
        self.get_records(&format!(
            "{}/social/friend/{}",
            self.config.base_url,
            urlencoding::encode(bap_id)
        ))
        .await
    }

    pub async fn messages_by_bap_id(
        &self,
        bap_id: &str,
    ) -> Result<Vec<ProtocolRecord>, ClientError> {
        self.get_records(&format!(
            "{}/social/@/{}/messages",
            self.config.base_url,
            urlencoding::encode(bap_id)
        ))
        .await
    }

    pub async fn channel_messages(
        &self,
        channel: &str,
    ) -> Result<Vec<ProtocolRecord>, ClientError> {
        self.get_records(&format!(
            "{}/social/channels/{}/messages",
            self.config.base_url,
            urlencoding::encode(channel)
        ))
        .await
    }

    /// Submit a raw transaction to `POST /ingest`; returns the txid the
    /// indexer assigned.
    pub async fn ingest(&self, raw_tx_hex: &str) -> Result<String, ClientError> {
        let url = format!("{}/ingest", self.config.base_url);
        tracing::debug!(%url, "submitting transaction for ingestion");
        let response = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .json(&IngestRequest {
                raw_tx: raw_tx_hex.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Service {
                status: status.as_u16(),
            });
        }
        let body: IngestResponse = response.json().await?;
        Ok(body.txid)
    }

    async fn get_records(&self, url: &str) -> Result<Vec<ProtocolRecord>, ClientError> {
        let response: QueryResponse = self.get_json(url).await?;
        Ok(response.into_records())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        tracing::debug!(%url, "index request");
        let response = self
            .http
            .get(url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Service {
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}

#[derive(Serialize)]
struct IngestRequest {
    #[serde(rename = "rawTx")]
    raw_tx: String,
}

#[derive(Deserialize)]
struct IngestResponse {
    txid: String,
}
