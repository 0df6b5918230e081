//! Platform client factory
//!
//! Creates provider clients from a source.

use crate::auth::get_gitlab_auth;
use crate::error::Result;
use crate::platform::{GitLabClient, PlatformClient};
use crate::types::{Provider, Source};

/// Create a platform client for a source
///
/// Resolves authentication and constructs the provider's REST client.
pub async fn create_platform_client(source: &Source) -> Result<Box<dyn PlatformClient>> {
    match source.provider {
        Provider::GitLab => {
            let auth = get_gitlab_auth(source.host.as_deref()).await?;
            let source = Source {
                host: Some(auth.host.clone()),
                ..source.clone()
            };
            Ok(Box::new(GitLabClient::new(auth.token, source)))
        }
    }
}
