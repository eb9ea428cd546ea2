//! Remote phrase providers

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::error::SuggestError;
use crate::Result;

/// Source of autocomplete phrases for a free-text term
#[async_trait]
pub trait PhraseProvider: Send + Sync {
    async fn fetch_phrases(&self, term: &str) -> Result<Vec<String>>;
}

#[derive(Debug, Deserialize)]
struct PhraseItem {
    phrase: String,
}

/// DuckDuckGo-style endpoint: `GET <endpoint>?q=<term>` → `[{"phrase": "..."}]`
#[derive(Debug, Clone)]
pub struct DuckDuckGoProvider {
    client: reqwest::Client,
    endpoint: Url,
}

impl DuckDuckGoProvider {
    pub const DEFAULT_ENDPOINT: &'static str = "https://duckduckgo.com/ac/";

    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).map_err(|_| SuggestError::InvalidEndpoint(endpoint.to_string()))?;
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(SuggestError::InvalidEndpoint(endpoint.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Neon)")
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PhraseProvider for DuckDuckGoProvider {
    async fn fetch_phrases(&self, term: &str) -> Result<Vec<String>> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", term);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SuggestError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let items: Vec<PhraseItem> = serde_json::from_slice(&body)?;
        Ok(items.into_iter().map(|item| item.phrase).collect())
    }
}

/// Provider that never returns phrases (offline mode)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProvider;

#[async_trait]
impl PhraseProvider for NullProvider {
    async fn fetch_phrases(&self, _term: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}
