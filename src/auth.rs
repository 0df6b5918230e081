//! GitLab authentication
//!
//! Resolves a token from the glab CLI or environment variables. Credential
//! storage itself stays outside this crate; only the resolved token string is
//! handed to the platform client.

use crate::error::{Error, Result};
use reqwest::Client;
use serde::Deserialize;
use std::env;
use tokio::process::Command;

/// Source of the resolved authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the glab CLI
    Cli,
    /// Token from an environment variable
    EnvVar,
}

/// Resolved GitLab authentication
#[derive(Debug, Clone)]
pub struct GitLabAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
    /// GitLab host (e.g. "gitlab.com")
    pub host: String,
}

/// Resolve GitLab authentication
///
/// Priority:
/// 1. glab CLI (`glab auth token`)
/// 2. `GITLAB_TOKEN` environment variable
/// 3. `GL_TOKEN` environment variable
pub async fn get_gitlab_auth(host: Option<&str>) -> Result<GitLabAuthConfig> {
    let host = host
        .map(String::from)
        .or_else(|| env::var("GITLAB_HOST").ok())
        .unwrap_or_else(|| "gitlab.com".to_string());

    if let Some(token) = get_glab_cli_token(&host).await {
        return Ok(GitLabAuthConfig {
            token,
            source: AuthSource::Cli,
            host,
        });
    }

    for var in ["GITLAB_TOKEN", "GL_TOKEN"] {
        if let Ok(token) = env::var(var) {
            return Ok(GitLabAuthConfig {
                token,
                source: AuthSource::EnvVar,
                host,
            });
        }
    }

    Err(Error::Auth(
        "No GitLab authentication found. Run `glab auth login` or set GITLAB_TOKEN".to_string(),
    ))
}

async fn get_glab_cli_token(host: &str) -> Option<String> {
    // Check glab is available
    Command::new("glab").arg("--version").output().await.ok()?;

    // Check authenticated
    let status = Command::new("glab")
        .args(["auth", "status", "--hostname", host])
        .output()
        .await
        .ok()?;

    if !status.status.success() {
        return None;
    }

    // Get token
    let output = Command::new("glab")
        .args(["auth", "token", "--hostname", host])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}

#[derive(Deserialize)]
struct GitLabUser {
    username: String,
}

/// Validate a resolved token against the API
///
/// Returns the authenticated username.
pub async fn test_gitlab_auth(config: &GitLabAuthConfig) -> Result<String> {
    let base = if config.host.starts_with("http://") || config.host.starts_with("https://") {
        config.host.clone()
    } else {
        format!("https://{}", config.host)
    };
    let url = format!("{base}/api/v4/user");

    let user: GitLabUser = Client::new()
        .get(&url)
        .header("PRIVATE-TOKEN", &config.token)
        .send()
        .await?
        .error_for_status()
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?
        .json()
        .await?;

    Ok(user.username)
}
