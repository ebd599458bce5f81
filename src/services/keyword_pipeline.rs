use std::path::PathBuf;

use anyhow::Context;
use url::Url;

use crate::domain::search_result::SearchResult;

use super::{ContentExtractor, MarkdownWriter, PageFetcher, SearchError, SearchProvider};

/// Runs keyword -> search -> fetch -> extract -> write, one item at a time.
pub struct KeywordPipeline<S> {
    pub provider: S,
    pub fetcher: PageFetcher,
    pub extractor: ContentExtractor,
    pub writer: MarkdownWriter,
    pub num_results: usize,
}

impl<S: SearchProvider> KeywordPipeline<S> {
    /// Returns the written files in order. A failing search aborts the run,
    /// a failing result is logged and skipped.
    pub async fn run(&self, keywords: &[&str]) -> Result<Vec<PathBuf>, SearchError> {
        let mut written = vec![];

        for keyword in keywords {
            let results = self.provider.search(keyword, self.num_results).await?;

            if results.is_empty() {
                log::info!("No organic results found for keyword: {}", keyword);
                continue;
            }

            log::debug!("Found {} results for keyword: {}", results.len(), keyword);

            for (index, result) in results.iter().enumerate() {
                match self.process_result(keyword, index, result).await {
                    Ok(path) => {
                        log::info!("Written to: {}", path.display());
                        written.push(path);
                    }
                    Err(e) => {
                        log::error!("Failed to process {}: {:?}", result.link, e);
                    }
                }
            }
        }

        Ok(written)
    }

    async fn process_result(
        &self,
        keyword: &str,
        index: usize,
        result: &SearchResult,
    ) -> anyhow::Result<PathBuf> {
        let url = Url::parse(&result.link)
            .with_context(|| format!("Invalid result link {}", result.link))?;

        let html = self.fetcher.fetch(&url).await?;
        let page = self
            .extractor
            .extract(&html)
            .with_context(|| format!("Failed to parse {}", url))?;

        let path = self
            .writer
            .write(&page, keyword, index, url.as_str())
            .await
            .with_context(|| format!("Failed to write markdown for {}", url))?;

        Ok(path)
    }
}
