use std::{fs, io, path::Path, sync::Arc};

use anyhow::{Context, Result};
use serde::Deserialize;
use shared::domain::RepositorySelector;
use url::Url;

use crate::transport::{GraphQlPartitionCreator, MissingPartitionCreator, PartitionCreator};

pub const DEFAULT_SETTINGS_FILE: &str = "partitions.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Empty disables remote calls.
    pub graphql_url: String,
    pub api_token: Option<String>,
    pub repository_location_name: String,
    pub repository_name: String,
    pub partitions_def_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            graphql_url: "http://127.0.0.1:3000/graphql".into(),
            api_token: None,
            repository_location_name: String::new(),
            repository_name: "__repository__".into(),
            partitions_def_name: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    graphql_url: Option<String>,
    api_token: Option<String>,
    repository_location: Option<String>,
    repository_name: Option<String>,
    partitions_def: Option<String>,
}

impl Settings {
    pub fn selector(&self) -> RepositorySelector {
        RepositorySelector::new(&self.repository_location_name, &self.repository_name)
    }

    pub fn graphql_endpoint(&self) -> Result<Option<Url>> {
        let raw = self.graphql_url.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let url = Url::parse(raw).with_context(|| format!("invalid graphql url '{raw}'"))?;
        Ok(Some(url))
    }

    pub fn partition_creator(&self) -> Result<Arc<dyn PartitionCreator>> {
        let Some(endpoint) = self.graphql_endpoint()? else {
            return Ok(Arc::new(MissingPartitionCreator));
        };
        let mut creator = GraphQlPartitionCreator::new(endpoint);
        if let Some(token) = &self.api_token {
            creator = creator.with_api_token(token.clone());
        }
        Ok(Arc::new(creator))
    }

    fn merge_file(&mut self, file: FileSettings) {
        if let Some(v) = file.graphql_url {
            self.graphql_url = v;
        }
        if let Some(v) = file.api_token {
            self.api_token = Some(v);
        }
        if let Some(v) = file.repository_location {
            self.repository_location_name = v;
        }
        if let Some(v) = file.repository_name {
            self.repository_name = v;
        }
        if let Some(v) = file.partitions_def {
            self.partitions_def_name = Some(v);
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env_value(&lookup, &["PARTITIONS_GRAPHQL_URL", "APP__GRAPHQL_URL"]) {
            self.graphql_url = v;
        }
        if let Some(v) = env_value(&lookup, &["APP__API_TOKEN"]) {
            self.api_token = Some(v);
        }
        if let Some(v) = env_value(&lookup, &["APP__REPOSITORY_LOCATION"]) {
            self.repository_location_name = v;
        }
        if let Some(v) = env_value(&lookup, &["APP__REPOSITORY_NAME"]) {
            self.repository_name = v;
        }
        if let Some(v) = env_value(&lookup, &["APP__PARTITIONS_DEF"]) {
            self.partitions_def_name = Some(v);
        }
    }
}

/// Later keys win, so `APP__` names override the short forms.
fn env_value(lookup: &impl Fn(&str) -> Option<String>, keys: &[&str]) -> Option<String> {
    keys.iter().rev().find_map(|&key| lookup(key))
}

/// Defaults, then `path` if it exists, then environment overrides.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
            settings.merge_file(file);
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
    }

    settings.apply_env(|key| std::env::var(key).ok());
    Ok(settings)
}

pub fn load_settings() -> Result<Settings> {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
