//! Per-family pipeline and the driver that runs it for every configured family

use std::path::PathBuf;

use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};

use crate::assets::copy_family_assets;
use crate::config::RegistrarConfig;
use crate::descriptor::{generate_descriptor, DescriptorOutcome};
use crate::discovery::list_asset_files;
use crate::patch::{patch_entry_point, PatchOutcome};

/// What happened to one family during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyReport {
    pub family: String,
    pub copied: Vec<PathBuf>,
    pub descriptor: DescriptorOutcome,
    pub patch: PatchOutcome,
}

/// Copy, describe and register a single family.
///
/// The asset listing is taken once, before copying, and shared by the copy and
/// descriptor steps. The entry-point edit finishes before this returns.
pub fn register_family(config: &RegistrarConfig, family: &str) -> Result<FamilyReport> {
    let files = list_asset_files(&config.asset_dir)?;

    let copied = copy_family_assets(config, family, &files)?;
    let descriptor = generate_descriptor(config, family, &files)?;
    let patch = patch_entry_point(config, family);

    Ok(FamilyReport {
        family: family.to_string(),
        copied,
        descriptor,
        patch,
    })
}

/// Register every family in order, one at a time.
///
/// Entry-point problems (lookup, read or write) only mark that family as
/// skipped and the next family still runs. Any other filesystem failure stops
/// the run; whatever earlier families wrote stays.
pub fn register_all(config: &RegistrarConfig, families: &[String]) -> Result<Vec<FamilyReport>> {
    if families.is_empty() {
        info!("* [Font] no font families configured");
    }

    families
        .iter()
        .map(|family| register_family(config, family))
        .collect()
}
