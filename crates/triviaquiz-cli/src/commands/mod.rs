pub mod fetch;
pub mod init;
pub mod play;

use std::path::PathBuf;

use anyhow::Result;

use triviaquiz_core::traits::QuestionProvider;
use triviaquiz_providers::{create_provider, load_config_from};

/// Build the provider from config, with `--endpoint` taking precedence.
fn resolve_provider(
    endpoint: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<Box<dyn QuestionProvider>> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    tracing::debug!(endpoint = %config.endpoint, "using question endpoint");
    create_provider(&config)
}
