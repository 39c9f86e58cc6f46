//! Provider configuration and factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use triviaquiz_core::traits::QuestionProvider;

use crate::trivia_api::{TriviaApiProvider, DEFAULT_ENDPOINT};

/// Top-level triviaquiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// URL the question set is fetched from.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again. Unset variables expand to an
/// empty string with a warning.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        match std::env::var(var_name) {
            Ok(value) => result.push_str(&value),
            Err(_) => tracing::warn!(var = var_name, "config references unset variable"),
        }
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `triviaquiz.toml` in the current directory
/// 2. `~/.config/triviaquiz/config.toml`
///
/// `TRIVIAQUIZ_ENDPOINT` overrides the endpoint from either file.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("triviaquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    if let Ok(endpoint) = std::env::var("TRIVIAQUIZ_ENDPOINT") {
        config.endpoint = endpoint;
    }
    config.endpoint = resolve_env_vars(&config.endpoint);

    tracing::debug!(endpoint = %config.endpoint, timeout_secs = ?config.timeout_secs, "config loaded");
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("triviaquiz"))
}

/// Create the question provider described by `config`.
pub fn create_provider(config: &QuizConfig) -> Result<Box<dyn QuestionProvider>> {
    let provider = TriviaApiProvider::new(Some(config.endpoint.clone()), config.timeout_secs)?;
    Ok(Box::new(provider))
}
