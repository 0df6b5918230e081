//! bumpbot - automated dependency-update merge requests for GitLab
//!
//! Publishes one dependency-update merge request per invocation. The
//! publisher inspects remote state (does the branch exist? is the update
//! commit already on it? is a merge request already open?) and performs only
//! the REST calls that are still missing, so re-running the same update is
//! safe.

pub mod auth;
pub mod error;
pub mod platform;
pub mod publish;
pub mod types;
