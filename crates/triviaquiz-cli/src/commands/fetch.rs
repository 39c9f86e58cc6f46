//! The `triviaquiz fetch` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub async fn execute(endpoint: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let provider = super::resolve_provider(endpoint, config_path)?;

    let questions = provider
        .fetch_questions()
        .await
        .context("failed to fetch questions")?;

    let json = serde_json::to_string_pretty(&questions).context("failed to serialize questions")?;
    println!("{json}");
    eprintln!("{} questions from {}", questions.len(), provider.name());

    Ok(())
}
