//! The `triviaquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("triviaquiz.toml").exists() {
        println!("triviaquiz.toml already exists, skipping.");
    } else {
        std::fs::write("triviaquiz.toml", SAMPLE_CONFIG)?;
        println!("Created triviaquiz.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit triviaquiz.toml to point at another question endpoint if needed");
    println!("  2. Run: triviaquiz play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# triviaquiz configuration

# Where question sets are fetched from. ${VAR} references are expanded.
endpoint = "https://the-trivia-api.com/api/questions"

# Give up on the request after this many seconds. Leave unset to wait forever.
# timeout_secs = 30
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses() {
        let config: triviaquiz_providers::QuizConfig = load_written(SAMPLE_CONFIG);
        assert_eq!(config.endpoint, "https://the-trivia-api.com/api/questions");
        assert!(config.timeout_secs.is_none());
    }

    fn load_written(content: &str) -> triviaquiz_providers::QuizConfig {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triviaquiz.toml");
        std::fs::write(&path, content).unwrap();
        triviaquiz_providers::load_config_from(Some(&path)).unwrap()
    }
}
