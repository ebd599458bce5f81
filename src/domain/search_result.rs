use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub link: String,
    pub title: Option<String>,
    pub position: Option<u32>,
}

/// Body returned by the search API. Results live under `organic_results`,
/// which is absent when the engine found nothing.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Vec<SearchResult>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::SearchResponse;

    #[test]
    fn missing_organic_results_is_empty() {
        let body = r#"{"error": "Google hasn't returned any results for this query."}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        assert!(response.organic_results.is_empty());
        assert!(response.error.is_some());
    }

    #[test]
    fn incidental_fields_are_ignored() {
        let body = r#"{
            "search_metadata": {"status": "Success"},
            "organic_results": [
                {"position": 1, "title": "Coffee", "link": "https://en.wikipedia.org/wiki/Coffee", "snippet": "..."},
                {"position": 2, "link": "https://www.coffee.org/"}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.organic_results.len(), 2);
        assert_eq!(response.organic_results[0].title.as_deref(), Some("Coffee"));
        assert_eq!(response.organic_results[1].link, "https://www.coffee.org/");
        assert_eq!(response.organic_results[1].title, None);
    }
}
