//! Project layout and `font.json` loading for fontreg-core

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "font.json";
pub const DEFAULT_ASSET_DIR: &str = "android/app/src/main/assets/fonts";
pub const DEFAULT_RESOURCE_DIR: &str = "android/app/src/main/res/font";
pub const DEFAULT_JAVA_DIR: &str = "android/app/src/main/java";
pub const DEFAULT_ENTRY_POINT: &str = "**/MainApplication.java";

/// Every location the registrar reads from or writes to.
#[derive(Debug, Clone)]
pub struct RegistrarConfig {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub asset_dir: PathBuf,
    pub resource_dir: PathBuf,
    pub java_dir: PathBuf,
    pub entry_point: EntryPointPattern,
}

impl RegistrarConfig {
    /// Standard React Native layout below `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        Ok(Self {
            config_file: root.join(DEFAULT_CONFIG_FILE),
            asset_dir: root.join(DEFAULT_ASSET_DIR),
            resource_dir: root.join(DEFAULT_RESOURCE_DIR),
            java_dir: root.join(DEFAULT_JAVA_DIR),
            entry_point: EntryPointPattern::main_application()?,
            root,
        })
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = path.into();
        self
    }

    pub fn with_asset_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.asset_dir = path.into();
        self
    }

    pub fn with_resource_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.resource_dir = path.into();
        self
    }

    pub fn with_java_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.java_dir = path.into();
        self
    }

    pub fn with_entry_point(mut self, pattern: EntryPointPattern) -> Self {
        self.entry_point = pattern;
        self
    }

    /// Where the descriptor for `family` lives.
    pub fn descriptor_path(&self, family: &str) -> PathBuf {
        self.resource_dir
            .join(format!("{}.xml", family.to_lowercase()))
    }
}

/// Contents of `font.json`. Only the `font` list is read; other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    #[serde(default)]
    pub font: Vec<String>,
}

impl FontConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading font config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing font config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Glob locating the Java entry point, relative to the Java source tree.
///
/// Standard glob syntax. `*`, `?` and `[...]` never match a path separator;
/// `**` spans any number of directories, including none.
#[derive(Debug, Clone)]
pub struct EntryPointPattern {
    pattern: Pattern,
}

impl EntryPointPattern {
    pub fn new(glob: &str) -> Result<Self> {
        let pattern = Pattern::new(glob)
            .with_context(|| format!("invalid entry point pattern: {glob}"))?;
        Ok(Self { pattern })
    }

    pub fn main_application() -> Result<Self> {
        Self::new(DEFAULT_ENTRY_POINT)
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Match a path relative to the Java source tree.
    pub fn matches(&self, relative: &Path) -> bool {
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };
        self.pattern.matches_path_with(relative, options)
    }
}
