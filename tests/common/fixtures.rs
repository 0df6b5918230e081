//! Test data factories for bumpbot types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use bumpbot::types::{
    Branch, BranchCommit, ChangeKind, Commit, FileChange, FileOperation, MergeRequest, Source,
    UpdatePlan,
};

/// Create a source pointing at the default test repository
pub fn make_source() -> Source {
    Source::gitlab("group/project")
}

/// Create an ordinary file change
pub fn make_change(path: &str) -> FileChange {
    FileChange {
        path: path.to_string(),
        content: format!("updated contents of {path}"),
        operation: FileOperation::Update,
        kind: ChangeKind::File,
    }
}

/// Create a submodule pointer change
pub fn make_submodule_change(path: &str, sha: &str) -> FileChange {
    FileChange {
        path: path.to_string(),
        content: sha.to_string(),
        operation: FileOperation::Update,
        kind: ChangeKind::Submodule,
    }
}

/// Create an update plan with a single file change and default values
pub fn make_plan(branch: &str) -> UpdatePlan {
    UpdatePlan {
        branch_name: branch.to_string(),
        base_sha: "0a1b2c3d4e".to_string(),
        changes: vec![make_change("Cargo.toml")],
        commit_message: "Bump serde from 1.0.0 to 1.0.1".to_string(),
        title: "Bump serde from 1.0.0 to 1.0.1".to_string(),
        description: "Bumps serde from 1.0.0 to 1.0.1.".to_string(),
        labels: vec![],
        assignee_ids: vec![],
        milestone_id: None,
        approver_ids: vec![],
    }
}

/// Create a branch pointing at a fixed commit
pub fn make_branch(name: &str) -> Branch {
    Branch {
        name: name.to_string(),
        commit: BranchCommit {
            id: "abc123def456".to_string(),
        },
    }
}

/// Create a commit with the given message
pub fn make_commit(message: &str) -> Commit {
    Commit {
        id: "abc123def456".to_string(),
        message: message.to_string(),
    }
}

/// Create a merge request with default values
pub fn make_merge_request(iid: u64, source: &str, target: &str) -> MergeRequest {
    MergeRequest {
        iid,
        web_url: format!("https://gitlab.com/group/project/-/merge_requests/{iid}"),
        source_branch: source.to_string(),
        target_branch: target.to_string(),
        title: format!("MR for {source}"),
    }
}
