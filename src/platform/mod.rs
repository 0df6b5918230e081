//! Hosting-provider clients
//!
//! Provides the REST seam the merge-request publisher drives.

mod factory;
mod gitlab;

pub use factory::create_platform_client;
pub use gitlab::GitLabClient;

use crate::error::Result;
use crate::types::{Branch, Commit, FileChange, Label, MergeRequest, Project, Source};
use async_trait::async_trait;

/// Merge-request creation payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMrRequest {
    /// Source branch (the update branch)
    pub source_branch: String,
    /// Target branch (the repository default branch)
    pub target_branch: String,
    /// Merge request title
    pub title: String,
    /// Merge request description
    pub description: String,
    /// Labels to attach
    pub labels: Vec<String>,
    /// User IDs to assign
    pub assignee_ids: Vec<u64>,
    /// Milestone to attach
    pub milestone_id: Option<u64>,
}

/// Provider client trait for merge-request publication
///
/// Abstracts the handful of REST operations the publisher needs, so the
/// decision procedure can be exercised against a mock.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Fetch repository metadata (default branch)
    async fn project(&self) -> Result<Project>;

    /// Look up a branch; `Ok(None)` means the branch does not exist
    async fn find_branch(&self, name: &str) -> Result<Option<Branch>>;

    /// Create a branch from a base commit SHA
    async fn create_branch(&self, name: &str, base_sha: &str) -> Result<Branch>;

    /// List the commits reachable from a ref
    async fn commits(&self, ref_name: &str) -> Result<Vec<Commit>>;

    /// Push one multi-file commit to a branch
    async fn create_commit(
        &self,
        branch: &str,
        message: &str,
        changes: &[FileChange],
    ) -> Result<()>;

    /// Update a submodule pointer on a branch
    async fn update_submodule(
        &self,
        path: &str,
        branch: &str,
        commit_sha: &str,
        message: &str,
    ) -> Result<()>;

    /// List the labels defined on the project
    async fn labels(&self) -> Result<Vec<Label>>;

    /// List merge requests in any state for a source/target branch pair
    async fn merge_requests(
        &self,
        source_branch: &str,
        target_branch: &str,
    ) -> Result<Vec<MergeRequest>>;

    /// Create a merge request
    async fn create_merge_request(&self, req: &CreateMrRequest) -> Result<MergeRequest>;

    /// Attach approvers to a merge request
    async fn set_approvers(&self, iid: u64, approver_ids: &[u64]) -> Result<()>;

    /// The source this client targets
    fn source(&self) -> &Source;
}
