use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::{
    configuration::SearchSettings,
    domain::search_result::{SearchResponse, SearchResult},
};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("no search api key configured, set SERPAPI_KEY")]
    MissingApiKey,
    #[error("search request failed")]
    Request(#[from] reqwest::Error),
    #[error("search api responded with {status}: {message}")]
    Api { status: StatusCode, message: String },
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Ordered result links for `query`, at most `num_results` of them.
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError>;
}

pub struct SerpApiClient {
    client: Client,
    api_key: String,
    url: String,
    engine: String,
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    engine: &'a str,
    q: &'a str,
    num: usize,
    api_key: &'a str,
}

impl SerpApiClient {
    pub fn new(settings: &SearchSettings) -> Result<Self, SearchError> {
        let api_key = match settings.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => return Err(SearchError::MissingApiKey),
        };

        Ok(SerpApiClient {
            client: Client::new(),
            api_key,
            url: settings.base_url.clone(),
            engine: settings.engine.clone(),
        })
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let res = self
            .client
            .get(&self.url)
            .query(&SearchQuery {
                engine: &self.engine,
                q: query,
                num: num_results,
                api_key: &self.api_key,
            })
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<SearchResponse>(&body)
                .ok()
                .and_then(|response| response.error)
                .unwrap_or(body);
            return Err(SearchError::Api { status, message });
        }

        let response: SearchResponse = serde_json::from_str(&body).map_err(|e| SearchError::Api {
            status,
            message: format!("unreadable response body: {}", e),
        })?;

        if let Some(error) = response.error {
            log::debug!("Search api note for query {}: {}", query, error);
        }

        let mut results = response.organic_results;
        results.truncate(num_results);
        Ok(results)
    }
}
