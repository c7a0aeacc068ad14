//! Copying font assets into `res/font`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::classify::{belongs_to_family, resource_name};
use crate::config::RegistrarConfig;

/// Copy every asset in `files` that belongs to `family` into the resource
/// directory under its normalized name. Existing copies are overwritten.
///
/// The resource directory is created even when nothing matches.
pub fn copy_family_assets(
    config: &RegistrarConfig,
    family: &str,
    files: &[String],
) -> Result<Vec<PathBuf>> {
    info!("* [Font] copying assets for {family}");

    fs::create_dir_all(&config.resource_dir).with_context(|| {
        format!(
            "creating resource directory {}",
            config.resource_dir.display()
        )
    })?;

    let mut copied = Vec::new();
    for file in files.iter().filter(|f| belongs_to_family(f, family)) {
        let from = config.asset_dir.join(file);
        let to = config.resource_dir.join(resource_name(file));

        fs::copy(&from, &to)
            .with_context(|| format!("copying {} to {}", from.display(), to.display()))?;
        debug!("* [Font] copied {} -> {}", from.display(), to.display());
        copied.push(to);
    }

    Ok(copied)
}
