//! CLI commands
//!
//! Command implementations for the `bumpbot` binary.

mod auth;
mod publish;

pub use auth::run_auth;
pub use publish::run_publish;
