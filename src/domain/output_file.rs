use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;

use super::extracted_page::ExtractedPage;

const KEYWORD_MAX_CHARS: usize = 15;

fn whitespace_runs() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Replaces every whitespace run with `_`, keeps the first 15 characters and
/// lowercases the result.
pub fn sanitize_keyword(keyword: &str) -> String {
    whitespace_runs()
        .replace_all(keyword, "_")
        .chars()
        .take(KEYWORD_MAX_CHARS)
        .collect::<String>()
        .to_lowercase()
}

/// `<timestamp>_<keyword>_<index + 1>.md`, the timestamp in ISO-8601 UTC with
/// milliseconds.
pub fn output_file_name(keyword: &str, index: usize, timestamp: DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}.md",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        sanitize_keyword(keyword),
        index + 1
    )
}

pub fn render_markdown(page: &ExtractedPage, url: &str) -> String {
    format!(
        "[//]: # (Source: {})\n\n# {}\n\n{}",
        url, page.title, page.content
    )
}
