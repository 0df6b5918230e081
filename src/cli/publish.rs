//! Publish command - publish a dependency-update merge request

use bumpbot::error::{Error, Result};
use bumpbot::platform::{PlatformClient, create_platform_client};
use bumpbot::publish::MergeRequestPublisher;
use bumpbot::types::{Source, UpdatePlan};
use std::path::Path;
use tracing::warn;

/// Run the publish command
pub async fn run_publish(
    repo: &str,
    host: Option<&str>,
    plan_path: &Path,
    dry_run: bool,
) -> Result<()> {
    let raw = std::fs::read_to_string(plan_path)
        .map_err(|e| Error::Plan(format!("cannot read {}: {e}", plan_path.display())))?;
    let plan: UpdatePlan = serde_json::from_str(&raw)
        .map_err(|e| Error::Plan(format!("cannot parse {}: {e}", plan_path.display())))?;

    if plan.changes.is_empty() {
        return Err(Error::Plan("plan contains no file changes".to_string()));
    }

    if dry_run {
        println!("Dry run - no changes will be made");
        println!(
            "Would publish {} change(s) on {} as \"{}\"",
            plan.changes.len(),
            plan.branch_name,
            plan.title
        );
        return Ok(());
    }

    let mut source = Source::gitlab(repo);
    if let Some(host) = host {
        source = source.with_host(host);
    }

    let client = create_platform_client(&source).await?;
    check_labels(client.as_ref(), &plan).await?;

    let publisher = MergeRequestPublisher::new(client.as_ref(), &plan);
    match publisher.create().await? {
        Some(merge_request) => {
            println!(
                "  ✓ Created merge request !{} for {}",
                merge_request.iid, plan.branch_name
            );
            println!("    {}", merge_request.web_url);
        }
        None => {
            println!("  - Merge request already open for {}", plan.branch_name);
        }
    }

    Ok(())
}

/// Warn about labels the project does not define
///
/// Label computation happens upstream; this only cross-checks the plan
/// against the project's label list.
async fn check_labels(client: &dyn PlatformClient, plan: &UpdatePlan) -> Result<()> {
    if plan.labels.is_empty() {
        return Ok(());
    }

    let known = client.labels().await?;
    for label in &plan.labels {
        if !known.iter().any(|l| l.name == *label) {
            warn!("label {label} does not exist on the project");
        }
    }

    Ok(())
}
