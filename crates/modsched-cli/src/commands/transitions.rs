// Rust guideline compliant 2026-10-16

//! Implementation of the `modsched transitions` command.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use modsched_core::Site;
use std::path::Path;

/// Prints the permitted transitions of a workflow.
///
/// # Errors
///
/// Returns an error if the site cannot be loaded or the workflow is unknown.
pub fn execute(site_path: &Path, workflow_id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let site = Site::from_file(site_path)
        .with_context(|| format!("Failed to load site {}", site_path.display()))?;
    let workflow = site.workflow(workflow_id)?;

    println!("{}", formatter.format_transitions(workflow).trim_end());
    Ok(())
}
