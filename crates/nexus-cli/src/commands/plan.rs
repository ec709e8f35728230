//! Plan-download command implementation

use std::path::Path;

use colored::Colorize;
use nexus_core::{ComponentLocation, SyncAction, SyncDecision, SyncPlan, SyncPlanner, TransferReason};

use crate::error::Result;
use crate::listing::load_listing;

/// Flags of the plan-download command
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
    pub flatten: bool,
    pub no_cache: bool,
    pub json: bool,
}

/// Run the plan-download command
pub fn run_plan_download(
    listing: &Path,
    remote_path: &str,
    local_dir: &Path,
    options: PlanOptions,
) -> Result<()> {
    let source = ComponentLocation::parse(remote_path)?;
    let records = load_listing(listing)?;

    let plan = SyncPlanner::new()
        .with_flatten(options.flatten)
        .with_no_cache(options.no_cache)
        .plan_download(&records, &source, local_dir)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    for message in &plan.messages {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }
    print!("{}", format_plan(&plan));
    Ok(())
}

/// Human-readable plan: one line per action, then a summary.
fn format_plan(plan: &SyncPlan) -> String {
    let mut out = String::new();

    for action in &plan.actions {
        out.push_str(&format_action(action));
        out.push('\n');
    }

    if plan.actions.is_empty() {
        out.push_str(&format!("{}\n", "No matching assets".dimmed()));
    } else if plan.is_up_to_date() {
        out.push_str(&format!("{}\n", "Everything is up to date".green()));
    }

    out.push_str(&format!(
        "{} {} to download, {} up to date\n",
        "Total:".dimmed(),
        plan.transfer_count(),
        plan.skip_count()
    ));
    out
}

fn format_action(action: &SyncAction) -> String {
    let label = match action.decision {
        SyncDecision::Skip => "skip".dimmed(),
        SyncDecision::Transfer {
            reason: TransferReason::Missing,
        } => "new".green(),
        SyncDecision::Transfer {
            reason: TransferReason::Changed,
        } => "changed".yellow(),
        SyncDecision::Transfer {
            reason: TransferReason::Forced,
        } => "forced".cyan(),
    };

    format!(
        "  {:<8} {} -> {}",
        label,
        action.remote_path,
        action.local_path.display()
    )
}
