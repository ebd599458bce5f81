use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::domain::{
    extracted_page::ExtractedPage,
    output_file::{output_file_name, render_markdown},
};

pub struct MarkdownWriter {
    directory: PathBuf,
}

impl MarkdownWriter {
    /// Creates `directory` if it does not exist yet.
    pub async fn new(directory: impl AsRef<Path>) -> std::io::Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&directory).await?;

        Ok(MarkdownWriter { directory })
    }

    pub async fn write(
        &self,
        page: &ExtractedPage,
        keyword: &str,
        index: usize,
        url: &str,
    ) -> std::io::Result<PathBuf> {
        let path = self
            .directory
            .join(output_file_name(keyword, index, Utc::now()));
        tokio::fs::write(&path, render_markdown(page, url)).await?;

        Ok(path)
    }
}
