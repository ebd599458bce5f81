use anyhow::Context;

use crate::{
    configuration::Settings,
    services::{ContentExtractor, KeywordPipeline, MarkdownWriter, PageFetcher, SerpApiClient},
};

pub const KEYWORDS: [&str; 3] = ["coffee", "playstation 5", "web scraping"];

pub async fn run(configuration: Settings) -> anyhow::Result<()> {
    let provider = SerpApiClient::new(&configuration.search)?;
    let fetcher = PageFetcher::new(&configuration.fetcher)?;
    let extractor = ContentExtractor::new()?;
    let writer = MarkdownWriter::new(&configuration.output.directory)
        .await
        .with_context(|| {
            format!(
                "Failed to create output directory {}",
                configuration.output.directory.display()
            )
        })?;

    let pipeline = KeywordPipeline {
        provider,
        fetcher,
        extractor,
        writer,
        num_results: configuration.search.num_results,
    };

    pipeline.run(&KEYWORDS).await?;

    Ok(())
}
