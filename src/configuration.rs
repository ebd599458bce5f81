use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

pub const SEARCH_API_KEY_VAR: &str = "SERPAPI_KEY";

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub search: SearchSettings,
    pub fetcher: FetcherSettings,
    pub output: OutputSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SearchSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub engine: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub num_results: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FetcherSettings {
    pub user_agent: String,
    pub accept: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OutputSettings {
    pub directory: PathBuf,
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    build_configuration(
        File::from(configuration_directory.join("base.yaml")).required(false),
        std::env::var(SEARCH_API_KEY_VAR).ok(),
    )
}

fn build_configuration(
    file: File<config::FileSourceFile, config::FileFormat>,
    api_key: Option<String>,
) -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .set_default("search.base_url", "https://serpapi.com/search.json")?
        .set_default("search.engine", "google")?
        .set_default("search.num_results", 5)?
        .set_default(
            "fetcher.user_agent",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)",
        )?
        .set_default(
            "fetcher.accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        )?
        .set_default("output.directory", "output")?
        .add_source(file)
        // e.g. `APP_SEARCH__NUM_RESULTS=3` sets `Settings.search.num_results`
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("search.api_key", api_key)?
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use config::File;

    use super::build_configuration;

    #[test]
    fn defaults_are_used_without_a_file() {
        let file = File::with_name("configuration/does-not-exist").required(false);
        let settings = build_configuration(file, Some("secret".to_string())).unwrap();

        assert_eq!(settings.search.api_key.as_deref(), Some("secret"));
        assert_eq!(settings.search.engine, "google");
        assert_eq!(settings.output.directory.to_str(), Some("output"));
        assert!(settings.fetcher.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base.yaml");
        std::fs::write(
            &path,
            "search:\n  engine: bing\n  num_results: \"3\"\noutput:\n  directory: pages\n",
        )
        .unwrap();

        let settings = build_configuration(File::from(path.as_path()), None).unwrap();

        assert_eq!(settings.search.engine, "bing");
        assert_eq!(settings.search.num_results, 3);
        assert_eq!(settings.output.directory.to_str(), Some("pages"));
        assert!(settings.search.api_key.is_none());
    }
}
