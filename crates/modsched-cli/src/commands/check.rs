// Rust guideline compliant 2026-10-16

//! Implementation of the `modsched check` command.
//!
//! Validates the scheduled moderation transitions of site entities.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use modsched_core::{Config, ContentEntity, Error, MessageFormat, Report, Site};
use rayon::prelude::*;
use std::path::Path;
use tracing::debug;

/// Validates entities of a site.
///
/// With no `entity_ids`, every entity is checked and entities whose bundle
/// is not moderated are skipped. Named entities must be moderated.
/// Each worker thread uses its own validator, and so its own state field cache.
///
/// # Arguments
///
/// * `site` - The loaded site
/// * `entity_ids` - Entities to check; empty for all
///
/// # Returns
///
/// One report per checked entity, in site or argument order.
///
/// # Errors
///
/// Returns an error if a named entity does not exist or validation fails.
pub fn run(site: &Site, entity_ids: &[String]) -> Result<Vec<Report>> {
    let explicit = !entity_ids.is_empty();
    let entities: Vec<&ContentEntity> = if explicit {
        entity_ids
            .iter()
            .map(|id| site.entity(id))
            .collect::<modsched_core::Result<_>>()?
    } else {
        site.entities().iter().collect()
    };

    let reports = entities
        .par_iter()
        .map_init(
            || site.validator(),
            |validator, entity| match validator.validate_entity(entity, site) {
                Ok(report) => Ok(Some(report)),
                Err(Error::WorkflowNotFound(bundle)) if !explicit => {
                    debug!(entity = %entity.id, bundle = %bundle, "skipping unmoderated entity");
                    Ok(None)
                }
                Err(err) => Err(err),
            },
        )
        .collect::<modsched_core::Result<Vec<_>>>()?;

    Ok(reports.into_iter().flatten().collect())
}

/// Executes the check command.
///
/// # Arguments
///
/// * `site_path` - Path to the site JSON document
/// * `entity_ids` - Entities to check; empty for all
/// * `config` - Loaded configuration
/// * `formatter` - Output formatter
///
/// # Returns
///
/// `true` if no violation was found.
///
/// # Errors
///
/// Returns an error if the site cannot be loaded or validation fails.
pub fn execute(
    site_path: &Path,
    entity_ids: &[String],
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<bool> {
    let site = Site::from_file(site_path)
        .with_context(|| format!("Failed to load site {}", site_path.display()))?;
    let reports = run(&site, entity_ids)?;

    let messages = MessageFormat::from_config(config);
    let output = formatter.format_reports(&reports, &messages);
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }

    Ok(reports.iter().all(Report::is_valid))
}
