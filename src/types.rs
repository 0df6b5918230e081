//! Core types for bumpbot

use serde::{Deserialize, Serialize};

/// Hosting provider for a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    /// GitLab or self-hosted GitLab
    GitLab,
}

/// The repository an update is published to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Provider type
    pub provider: Provider,
    /// Repository path, including nested groups (e.g. "group/subgroup/project")
    pub repo: String,
    /// Custom host (None for gitlab.com)
    pub host: Option<String>,
}

impl Source {
    /// GitLab source for a repository path
    pub fn gitlab(repo: impl Into<String>) -> Self {
        Self {
            provider: Provider::GitLab,
            repo: repo.into(),
            host: None,
        }
    }

    /// Pin the source to a self-hosted instance
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }
}

/// How a change applies to its path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOperation {
    /// Create a new file
    Create,
    /// Replace the content of an existing file
    #[default]
    Update,
    /// Delete the file
    Delete,
}

/// What kind of repository entry a change touches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Ordinary file content
    #[default]
    File,
    /// Submodule pointer; `content` carries the new pointer commit SHA
    Submodule,
}

/// A single file change in the update commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Path of the file relative to the repository root
    pub path: String,
    /// New file content, or the new pointer commit SHA for a submodule
    pub content: String,
    /// How the change applies
    #[serde(default)]
    pub operation: FileOperation,
    /// File or submodule
    #[serde(default)]
    pub kind: ChangeKind,
}

/// Everything needed to publish one dependency-update merge request
///
/// The branch name, commit message, title, description and metadata are all
/// computed upstream; this is the bundle handed to the publisher (and the
/// shape of the CLI's plan file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlan {
    /// Branch the update is published on
    pub branch_name: String,
    /// Commit SHA the branch is created from when it does not exist yet
    pub base_sha: String,
    /// Ordered file changes making up the update commit
    pub changes: Vec<FileChange>,
    /// Commit message for the update commit
    pub commit_message: String,
    /// Merge request title
    pub title: String,
    /// Merge request description
    pub description: String,
    /// Labels to attach to the merge request
    #[serde(default)]
    pub labels: Vec<String>,
    /// User IDs to assign
    #[serde(default)]
    pub assignee_ids: Vec<u64>,
    /// Milestone to attach
    #[serde(default)]
    pub milestone_id: Option<u64>,
    /// User IDs attached as approvers after creation
    #[serde(default)]
    pub approver_ids: Vec<u64>,
}

/// Repository metadata
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Branch merge requests target by default
    pub default_branch: String,
}

/// Commit tip embedded in a branch lookup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BranchCommit {
    /// Commit SHA
    pub id: String,
}

/// A branch on the remote repository
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Branch {
    /// Branch name
    pub name: String,
    /// Commit the branch currently points at
    pub commit: BranchCommit,
}

/// A commit in a branch's history
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Commit {
    /// Commit SHA
    pub id: String,
    /// Full commit message
    pub message: String,
}

/// A label defined on the project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    /// Label name
    pub name: String,
}

/// A merge request on the remote repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeRequest {
    /// Internal ID, used in follow-up calls
    pub iid: u64,
    /// Web URL for the merge request
    pub web_url: String,
    /// Source branch name
    pub source_branch: String,
    /// Target branch name
    pub target_branch: String,
    /// Merge request title
    pub title: String,
}
