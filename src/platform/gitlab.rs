//! GitLab platform client implementation

use crate::error::{Error, Result};
use crate::platform::{CreateMrRequest, PlatformClient};
use crate::types::{
    Branch, Commit, FileChange, FileOperation, Label, MergeRequest, Project, Source,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

/// GitLab client using reqwest
pub struct GitLabClient {
    client: Client,
    token: String,
    base_url: String,
    source: Source,
}

#[derive(Serialize)]
struct CreateBranchPayload {
    branch: String,
    #[serde(rename = "ref")]
    base: String,
}

#[derive(Serialize)]
struct CommitAction {
    action: &'static str,
    file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Serialize)]
struct CreateCommitPayload {
    branch: String,
    commit_message: String,
    actions: Vec<CommitAction>,
}

#[derive(Serialize)]
struct UpdateSubmodulePayload {
    branch: String,
    commit_sha: String,
    commit_message: String,
}

#[derive(Serialize)]
struct CreateMrPayload {
    source_branch: String,
    target_branch: String,
    title: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    milestone_id: Option<u64>,
}

#[derive(Serialize)]
struct SetApproversPayload {
    approver_ids: Vec<u64>,
}

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl GitLabClient {
    /// Create a new GitLab client for a source
    ///
    /// The source host may be a bare hostname (`https://` is assumed) or a
    /// full base URL with scheme, which is what tests use to point the client
    /// at a local server.
    pub fn new(token: String, source: Source) -> Self {
        let host = source
            .host
            .clone()
            .unwrap_or_else(|| "gitlab.com".to_string());

        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host
        } else {
            format!("https://{host}")
        };

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url,
            source,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v4{path}", self.base_url)
    }

    fn project_url(&self, rest: &str) -> String {
        self.api_url(&format!("/projects/{}{rest}", self.encoded_project()))
    }

    fn encoded_project(&self) -> String {
        urlencoding::encode(&self.source.repo).into_owned()
    }
}

fn commit_action(change: &FileChange) -> CommitAction {
    let (action, content) = match change.operation {
        FileOperation::Create => ("create", Some(change.content.clone())),
        FileOperation::Update => ("update", Some(change.content.clone())),
        FileOperation::Delete => ("delete", None),
    };

    CommitAction {
        action,
        file_path: change.path.clone(),
        content,
    }
}

#[async_trait]
impl PlatformClient for GitLabClient {
    async fn project(&self) -> Result<Project> {
        let url = self.project_url("");
        debug!("fetching project metadata for {}", self.source.repo);

        let project: Project = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(project)
    }

    async fn find_branch(&self, name: &str) -> Result<Option<Branch>> {
        let url = self.project_url(&format!(
            "/repository/branches/{}",
            urlencoding::encode(name)
        ));
        debug!("looking up branch {name}");

        let response = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?;

        // A missing branch is the normal first-run case, not an error.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let branch: Branch = response
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(Some(branch))
    }

    async fn create_branch(&self, name: &str, base_sha: &str) -> Result<Branch> {
        let url = self.project_url("/repository/branches");
        debug!("creating branch {name} from {base_sha}");

        let payload = CreateBranchPayload {
            branch: name.to_string(),
            base: base_sha.to_string(),
        };

        let branch: Branch = self
            .client
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(branch)
    }

    async fn commits(&self, ref_name: &str) -> Result<Vec<Commit>> {
        let url = self.project_url("/repository/commits");
        debug!("listing commits on {ref_name}");

        let commits: Vec<Commit> = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .query(&[("ref_name", ref_name)])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(commits)
    }

    async fn create_commit(
        &self,
        branch: &str,
        message: &str,
        changes: &[FileChange],
    ) -> Result<()> {
        let url = self.project_url("/repository/commits");
        debug!("pushing commit with {} action(s) to {branch}", changes.len());

        let payload = CreateCommitPayload {
            branch: branch.to_string(),
            commit_message: message.to_string(),
            actions: changes.iter().map(commit_action).collect(),
        };

        self.client
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?;

        Ok(())
    }

    async fn update_submodule(
        &self,
        path: &str,
        branch: &str,
        commit_sha: &str,
        message: &str,
    ) -> Result<()> {
        let url = self.project_url(&format!(
            "/repository/submodules/{}",
            urlencoding::encode(path)
        ));
        debug!("updating submodule {path} on {branch} to {commit_sha}");

        let payload = UpdateSubmodulePayload {
            branch: branch.to_string(),
            commit_sha: commit_sha.to_string(),
            commit_message: message.to_string(),
        };

        self.client
            .put(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?;

        Ok(())
    }

    async fn labels(&self) -> Result<Vec<Label>> {
        let url = self.project_url("/labels");
        debug!("listing project labels");

        let labels: Vec<Label> = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(labels)
    }

    async fn merge_requests(
        &self,
        source_branch: &str,
        target_branch: &str,
    ) -> Result<Vec<MergeRequest>> {
        let url = self.project_url("/merge_requests");
        debug!("listing merge requests {source_branch} -> {target_branch}");

        let merge_requests: Vec<MergeRequest> = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .query(&[
                ("source_branch", source_branch),
                ("target_branch", target_branch),
                ("state", "all"),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(merge_requests)
    }

    async fn create_merge_request(&self, req: &CreateMrRequest) -> Result<MergeRequest> {
        let url = self.project_url("/merge_requests");
        debug!(
            "creating merge request {} -> {}",
            req.source_branch, req.target_branch
        );

        let payload = CreateMrPayload {
            source_branch: req.source_branch.clone(),
            target_branch: req.target_branch.clone(),
            title: req.title.clone(),
            description: req.description.clone(),
            labels: if req.labels.is_empty() {
                None
            } else {
                Some(req.labels.join(","))
            },
            assignee_ids: if req.assignee_ids.is_empty() {
                None
            } else {
                Some(req.assignee_ids.clone())
            },
            milestone_id: req.milestone_id,
        };

        let merge_request: MergeRequest = self
            .client
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(merge_request)
    }

    async fn set_approvers(&self, iid: u64, approver_ids: &[u64]) -> Result<()> {
        let url = self.project_url(&format!("/merge_requests/{iid}/approvers"));
        debug!("attaching {} approver(s) to !{iid}", approver_ids.len());

        let payload = SetApproversPayload {
            approver_ids: approver_ids.to_vec(),
        };

        self.client
            .put(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?;

        Ok(())
    }

    fn source(&self) -> &Source {
        &self.source
    }
}
