// Rust guideline compliant 2026-10-16

//! Implementation of the `modsched timeline` command.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use modsched_core::{Config, Site};
use std::path::Path;

/// Prints the sorted moderation timeline of one entity.
///
/// # Errors
///
/// Returns an error if the site cannot be loaded, the entity does not exist
/// or its scheduled updates cannot be collected.
pub fn execute(
    site_path: &Path,
    entity_id: &str,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let site = Site::from_file(site_path)
        .with_context(|| format!("Failed to load site {}", site_path.display()))?;
    let entity = site.entity(entity_id)?;
    let timeline = site.validator().timeline(entity)?;

    println!(
        "{}",
        formatter
            .format_timeline(entity_id, &timeline, &config.date_format)
            .trim_end()
    );
    Ok(())
}
