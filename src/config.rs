use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub jira: Option<JiraConfig>,
}

#[derive(Debug, Deserialize)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".usecases")
        .join("config.toml")
}

/// Credentials from `~/.usecases/config.toml`, falling back to the
/// `JIRA_URL` / `JIRA_EMAIL` / `JIRA_API_TOKEN` environment variables.
pub fn load_jira_config() -> Result<JiraConfig> {
    let path = config_path();
    if path.exists() {
        if let Some(jira) = read_config_file(&path)?.jira {
            return Ok(jira);
        }
    }

    if let Some(jira) = config_from_env() {
        return Ok(jira);
    }

    bail!(
        "No Jira credentials found. Add a [jira] section with base_url, email and \
         api_token to {}, or set JIRA_URL, JIRA_EMAIL and JIRA_API_TOKEN.",
        path.display()
    )
}

fn read_config_file(path: &std::path::Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents)
}

fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).context("Failed to parse config.toml")
}

fn config_from_env() -> Option<JiraConfig> {
    let base_url = std::env::var("JIRA_URL").ok()?;
    let email = std::env::var("JIRA_EMAIL").ok()?;
    let api_token = std::env::var("JIRA_API_TOKEN").ok()?;
    Some(JiraConfig {
        base_url,
        email,
        api_token,
    })
}
