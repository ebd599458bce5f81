use reqwest::{
    header::{HeaderMap, HeaderValue, InvalidHeaderValue, ACCEPT, USER_AGENT},
    Client, StatusCode,
};
use url::Url;

use crate::configuration::FetcherSettings;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid header value in fetcher settings")]
    Header(#[from] InvalidHeaderValue),
    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error! status: {status} for {url}")]
    Status { url: Url, status: StatusCode },
}

/// Downloads result pages while presenting itself as a desktop browser.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(settings: &FetcherSettings) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&settings.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_str(&settings.accept)?);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FetchError::Client)?;

        Ok(PageFetcher { client })
    }

    pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let request_error = |source| FetchError::Request {
            url: url.clone(),
            source,
        };

        let res = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(request_error)?;

        if !res.status().is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status: res.status(),
            });
        }

        res.text().await.map_err(request_error)
    }
}
