// Rust guideline compliant 2026-10-16

//! Implementation of the `modsched fields` command.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use modsched_core::{FieldResolver, Site};
use std::path::Path;

/// Prints the fields of a bundle that reference scheduled updates.
///
/// # Errors
///
/// Returns an error if the site cannot be loaded or the bundle is unknown.
pub fn execute(
    site_path: &Path,
    entity_type: &str,
    bundle: &str,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let site = Site::from_file(site_path)
        .with_context(|| format!("Failed to load site {}", site_path.display()))?;
    let fields = FieldResolver::new(&site).scheduled_update_reference_fields(entity_type, bundle)?;

    println!(
        "{}",
        formatter
            .format_fields(entity_type, bundle, &fields)
            .trim_end()
    );
    Ok(())
}
