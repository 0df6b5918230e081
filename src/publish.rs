//! Merge-request publication
//!
//! The decision procedure that makes publishing idempotent: inspect remote
//! state (branch, merge request, commit history) and perform only the
//! side-effecting calls that are still missing.

use crate::error::Result;
use crate::platform::{CreateMrRequest, PlatformClient};
use crate::types::{ChangeKind, Commit, MergeRequest, UpdatePlan};
use tracing::info;

/// Publishes one dependency-update merge request
pub struct MergeRequestPublisher<'a> {
    client: &'a dyn PlatformClient,
    plan: &'a UpdatePlan,
}

impl<'a> MergeRequestPublisher<'a> {
    /// Create a publisher for an update plan
    pub fn new(client: &'a dyn PlatformClient, plan: &'a UpdatePlan) -> Self {
        Self { client, plan }
    }

    /// Ensure a merge request for the update exists
    ///
    /// Returns the created merge request, or `None` when a merge request
    /// already exists for the branch - in that case nothing is pushed and
    /// nothing is created.
    ///
    /// The sequence:
    /// 1. Fetch the project's default branch (the merge-request target).
    /// 2. Look up the update branch. If absent, create it from the base
    ///    commit and push the update commit.
    /// 3. If the branch already existed, first check for a merge request
    ///    (any state) from it to the default branch and stop early when one
    ///    is found; otherwise push the update commit unless the branch
    ///    already carries it.
    /// 4. Create the merge request, then attach approvers when supplied.
    pub async fn create(&self) -> Result<Option<MergeRequest>> {
        let project = self.client.project().await?;

        match self.client.find_branch(&self.plan.branch_name).await? {
            Some(_) => {
                let existing = self
                    .client
                    .merge_requests(&self.plan.branch_name, &project.default_branch)
                    .await?;
                if !existing.is_empty() {
                    info!(
                        "merge request already exists for {}; nothing to do",
                        self.plan.branch_name
                    );
                    return Ok(None);
                }

                let commits = self.client.commits(&self.plan.branch_name).await?;
                if commit_exists(&commits, &self.plan.commit_message) {
                    info!(
                        "update commit already on {}; skipping push",
                        self.plan.branch_name
                    );
                } else {
                    self.push_commit().await?;
                }
            }
            None => {
                self.client
                    .create_branch(&self.plan.branch_name, &self.plan.base_sha)
                    .await?;
                info!(
                    "created branch {} from {}",
                    self.plan.branch_name, self.plan.base_sha
                );
                self.push_commit().await?;
            }
        }

        let req = CreateMrRequest {
            source_branch: self.plan.branch_name.clone(),
            target_branch: project.default_branch,
            title: self.plan.title.clone(),
            description: self.plan.description.clone(),
            labels: self.plan.labels.clone(),
            assignee_ids: self.plan.assignee_ids.clone(),
            milestone_id: self.plan.milestone_id,
        };

        let merge_request = self.client.create_merge_request(&req).await?;
        info!(
            "created merge request !{} ({})",
            merge_request.iid, merge_request.web_url
        );

        if !self.plan.approver_ids.is_empty() {
            self.client
                .set_approvers(merge_request.iid, &self.plan.approver_ids)
                .await?;
        }

        Ok(Some(merge_request))
    }

    /// Push the update to the branch
    ///
    /// A change set consisting of exactly one submodule pointer goes through
    /// the submodule endpoint; everything else is one multi-file commit.
    async fn push_commit(&self) -> Result<()> {
        match self.plan.changes.as_slice() {
            [only] if only.kind == ChangeKind::Submodule => {
                self.client
                    .update_submodule(
                        &only.path,
                        &self.plan.branch_name,
                        &only.content,
                        &self.plan.commit_message,
                    )
                    .await
            }
            changes => {
                self.client
                    .create_commit(&self.plan.branch_name, &self.plan.commit_message, changes)
                    .await
            }
        }
    }
}

/// Whether the branch already carries the intended update commit
///
/// Equality is delegated to the remote commit list: a commit counts as the
/// update commit when its message matches the intended commit message.
fn commit_exists(commits: &[Commit], message: &str) -> bool {
    commits.iter().any(|c| c.message == message)
}
