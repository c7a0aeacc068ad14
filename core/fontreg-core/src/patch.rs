//! Registering font families in `MainApplication.java`
//!
//! The edit is textual. Two anchor lines that every React Native template
//! carries are used as insertion points, and each inserted line is checked for
//! first so that repeated runs leave the file alone.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::RegistrarConfig;
use crate::discovery::EntryPointSearch;

pub const ON_CREATE_ANCHOR: &str = "super.onCreate();";
pub const IMPORT_ANCHOR: &str = "import com.facebook.react.ReactApplication;";
pub const FONT_MANAGER_IMPORT: &str = "import com.facebook.react.views.text.ReactFontManager;";

/// `ReactFontManager` call registering `family` against its descriptor resource.
pub fn registration_line(family: &str) -> String {
    format!(
        "ReactFontManager.getInstance().addCustomFont(this, \"{family}\", R.font.{});",
        family.to_lowercase()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportEdit {
    Inserted,
    AlreadyPresent,
    AnchorMissing,
}

/// Result of editing the source text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEdit {
    /// The registration line is already there; nothing to do.
    AlreadyRegistered,
    /// `super.onCreate();` is nowhere to be found; nothing was changed.
    AnchorMissing,
    Patched { text: String, import: ImportEdit },
}

/// Insert the registration call after `super.onCreate();` and, if needed, the
/// `ReactFontManager` import after the `ReactApplication` import. Only the first
/// occurrence of each anchor is used.
pub fn apply_registration(source: &str, family: &str) -> SourceEdit {
    let call = registration_line(family);
    if source.contains(&call) {
        return SourceEdit::AlreadyRegistered;
    }
    if !source.contains(ON_CREATE_ANCHOR) {
        return SourceEdit::AnchorMissing;
    }

    let mut text = source.replacen(ON_CREATE_ANCHOR, &format!("{ON_CREATE_ANCHOR}\n    {call}"), 1);

    let import = if text.contains(FONT_MANAGER_IMPORT) {
        ImportEdit::AlreadyPresent
    } else if text.contains(IMPORT_ANCHOR) {
        text = text.replacen(IMPORT_ANCHOR, &format!("{IMPORT_ANCHOR}\n{FONT_MANAGER_IMPORT}"), 1);
        ImportEdit::Inserted
    } else {
        ImportEdit::AnchorMissing
    };

    SourceEdit::Patched { text, import }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatchOutcome {
    Registered { path: PathBuf, import_added: bool },
    AlreadyRegistered { path: PathBuf },
    Skipped { reason: String },
}

/// Locate the entry point and register `family` in it.
///
/// Never fails the run. Lookup failures (walk errors, no match, several
/// matches), read or write failures on the located file, and a missing
/// `super.onCreate();` anchor are logged and reported as [`PatchOutcome::Skipped`].
/// A file that is not valid UTF-8 is left as it is.
pub fn patch_entry_point(config: &RegistrarConfig, family: &str) -> PatchOutcome {
    let search = EntryPointSearch::new(&config.java_dir, config.entry_point.clone());
    let path = match search.locate() {
        Ok(path) => path,
        Err(err) => {
            error!("* [Font] [{family}] cannot locate entry point: {err}");
            return PatchOutcome::Skipped {
                reason: err.to_string(),
            };
        }
    };

    match register_in(path, family) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("* [Font] [{family}] {err:#}");
            PatchOutcome::Skipped {
                reason: format!("{err:#}"),
            }
        }
    }
}

fn register_in(path: PathBuf, family: &str) -> Result<PatchOutcome> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let source = fs::read_to_string(&path)
        .with_context(|| format!("reading entry point {}", path.display()))?;

    let (text, import) = match apply_registration(&source, family) {
        SourceEdit::AlreadyRegistered => {
            info!("* [Font] [{family}] is already registered in {file_name}");
            return Ok(PatchOutcome::AlreadyRegistered { path });
        }
        SourceEdit::AnchorMissing => {
            warn!("* [Font] [{family}] `{ON_CREATE_ANCHOR}` not found in {file_name}, leaving it untouched");
            return Ok(PatchOutcome::Skipped {
                reason: format!("`{ON_CREATE_ANCHOR}` not found in {}", path.display()),
            });
        }
        SourceEdit::Patched { text, import } => (text, import),
    };

    info!("* [Font] Add code {}", registration_line(family));
    match import {
        ImportEdit::Inserted => info!("* [Font] Import {FONT_MANAGER_IMPORT}"),
        ImportEdit::AnchorMissing => {
            warn!("* [Font] `{IMPORT_ANCHOR}` not found in {file_name}, add `{FONT_MANAGER_IMPORT}` by hand")
        }
        ImportEdit::AlreadyPresent => {}
    }

    fs::write(&path, text).with_context(|| format!("writing entry point {}", path.display()))?;
    info!("* [Font] [{family}] is registered to {file_name}");

    Ok(PatchOutcome::Registered {
        path,
        import_added: import == ImportEdit::Inserted,
    })
}
