//! Auth command - test and manage GitLab authentication

use bumpbot::auth::{get_gitlab_auth, test_gitlab_auth};
use bumpbot::error::Result;

/// Run the auth test command
pub async fn run_auth_test(host: Option<&str>) -> Result<()> {
    println!("Testing GitLab authentication...");
    let config = get_gitlab_auth(host).await?;
    let username = test_gitlab_auth(&config).await?;
    println!("Authenticated as: {username}");
    println!("Token source: {:?}", config.source);
    println!("Host: {}", config.host);
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("GitLab Authentication Setup");
    println!("===========================");
    println!();
    println!("Option 1: GitLab CLI (glab)");
    println!("  Install: https://gitlab.com/gitlab-org/cli");
    println!("  Run: glab auth login");
    println!();
    println!("Option 2: Environment variable");
    println!("  Set GITLAB_TOKEN or GL_TOKEN");
    println!();
    println!("For self-hosted GitLab:");
    println!("  Set GITLAB_HOST to your instance hostname");
}

/// Wrapper for auth commands
pub async fn run_auth(action: &str, host: Option<&str>) -> Result<()> {
    match action {
        "test" => run_auth_test(host).await,
        "setup" => {
            run_auth_setup();
            Ok(())
        }
        _ => {
            println!("Unknown action: {action}. Use 'test' or 'setup'.");
            Ok(())
        }
    }
}
