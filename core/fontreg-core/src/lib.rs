//! fontreg-core: teaching an Android build about the fonts it ships
//!
//! React Native projects keep their custom fonts as loose files under
//! `android/app/src/main/assets/fonts`. Android's typeface machinery would much
//! rather see them as `res/font` resources grouped into families. This crate
//! does the paperwork in between.
//!
//! ## The Per-Family Pipeline
//!
//! For each family named in `font.json`, in order:
//!
//! 1. **Copy**: every asset whose filename contains the family name lands in
//!    `res/font` under a resource-safe name (lowercase, `-` becomes `_`).
//! 2. **Describe**: a `font-family` XML descriptor maps each copy to a style
//!    and weight guessed from its filename. Written once, never overwritten.
//! 3. **Register**: `MainApplication.java` gains a `ReactFontManager` import and
//!    an `addCustomFont` call right after `super.onCreate();`.
//!
//! Every step can be repeated safely. Copies are refreshed, descriptors are left
//! alone once they exist, and the Java edits are only made when the exact line
//! is missing.
//!
//! ## A Sample Run
//!
//! ```rust,no_run
//! use fontreg_core::config::{FontConfig, RegistrarConfig};
//! use fontreg_core::registrar::register_all;
//!
//! let config = RegistrarConfig::for_root("/path/to/app")?;
//! let fonts = FontConfig::load(&config.config_file)?;
//!
//! for report in register_all(&config, &fonts.font)? {
//!     println!("{}: {} file(s) copied", report.family, report.copied.len());
//! }
//! #
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Known Fragility
//!
//! Family and weight detection are plain substring checks on filenames. A
//! family called "Bold" will happily claim `OpenSans-Bold.ttf`. That is how
//! existing projects were set up, so the matching stays as it is.

pub mod assets;
pub mod classify;
pub mod config;
pub mod descriptor;
pub mod discovery;
pub mod output;
pub mod patch;
pub mod registrar;
