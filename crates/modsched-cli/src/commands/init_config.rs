// Rust guideline compliant 2026-10-16

//! Implementation of the `modsched init-config` command.

use anyhow::{bail, Result};
use modsched_core::config::CONFIG_FILE;
use modsched_core::Config;
use std::path::Path;

/// Writes the default configuration file into `dir`.
///
/// # Arguments
///
/// * `dir` - Target directory
/// * `force` - Overwrite an existing file
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or it cannot
/// be written.
pub fn execute(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!("{} already exists. Use --force to overwrite.", path.display());
    }

    Config::default().save(dir)?;
    println!("Wrote {}", path.display());
    Ok(())
}
