//! `font-family` XML descriptors for Android resources

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::classify::{belongs_to_family, font_style, font_weight, resource_ident};
use crate::config::RegistrarConfig;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<font-family xmlns:app="http://schemas.android.com/apk/res-auto">"#;
const XML_FOOTER: &str = "</font-family>";

/// One `<font>` element of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontEntry {
    pub ident: String,
    pub style: &'static str,
    pub weight: &'static str,
}

impl FontEntry {
    pub fn from_file_name(file_name: &str) -> Self {
        let ident = resource_ident(file_name);
        Self {
            style: font_style(&ident),
            weight: font_weight(&ident),
            ident,
        }
    }

    fn render(&self) -> String {
        format!(
            "\t<font app:fontStyle=\"{}\" app:fontWeight=\"{}\" app:font=\"@font/{}\"/>",
            self.style, self.weight, self.ident
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DescriptorOutcome {
    Generated { path: PathBuf },
    AlreadyExists { path: PathBuf },
    NoMatchingAssets,
}

/// Entries for every file in `files` belonging to `family`, in listing order.
pub fn family_entries(family: &str, files: &[String]) -> Vec<FontEntry> {
    files
        .iter()
        .filter(|f| belongs_to_family(f, family))
        .map(|f| FontEntry::from_file_name(f))
        .collect()
}

/// Full descriptor text. No trailing newline.
pub fn render_descriptor(entries: &[FontEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(XML_HEADER.to_string());
    lines.extend(entries.iter().map(FontEntry::render));
    lines.push(XML_FOOTER.to_string());
    lines.join("\n")
}

/// Write `<res>/<family>.xml` unless it is already there.
pub fn generate_descriptor(
    config: &RegistrarConfig,
    family: &str,
    files: &[String],
) -> Result<DescriptorOutcome> {
    info!("* [Font] preparing descriptor for {family}");

    let entries = family_entries(family, files);
    if entries.is_empty() {
        return Ok(DescriptorOutcome::NoMatchingAssets);
    }

    let path = config.descriptor_path(family);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if path.exists() {
        info!("* [Font] {file_name} already exists");
        return Ok(DescriptorOutcome::AlreadyExists { path });
    }

    fs::write(&path, render_descriptor(&entries))
        .with_context(|| format!("writing descriptor {}", path.display()))?;
    info!("* [Font] {file_name} is generated");

    Ok(DescriptorOutcome::Generated { path })
}
