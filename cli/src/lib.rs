//! fontreg CLI

use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use log::LevelFilter;

use fontreg_core::config::{EntryPointPattern, FontConfig, RegistrarConfig};
use fontreg_core::descriptor::DescriptorOutcome;
use fontreg_core::output::{write_json_pretty, write_ndjson};
use fontreg_core::patch::PatchOutcome;
use fontreg_core::registrar::{register_all, FamilyReport};

const ROOT_ENV: &str = "FONTREG_PROJECT_ROOT";

/// CLI entrypoint for fontreg.
#[derive(Debug, Parser)]
#[command(
    name = "fontreg",
    about = "Register custom font families into a React Native Android project"
)]
pub struct Cli {
    /// Project root (defaults to $FONTREG_PROJECT_ROOT, then the current directory)
    #[arg(long = "root", value_hint = ValueHint::DirPath)]
    root: Option<PathBuf>,

    /// Font config listing families under the `font` key [default: <root>/font.json]
    #[arg(short = 'c', long = "config", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Directory holding the font assets [default: <root>/android/app/src/main/assets/fonts]
    #[arg(long = "assets", value_hint = ValueHint::DirPath)]
    assets: Option<PathBuf>,

    /// Android font resource directory [default: <root>/android/app/src/main/res/font]
    #[arg(long = "res", value_hint = ValueHint::DirPath)]
    res: Option<PathBuf>,

    /// Java source tree searched for the entry point [default: <root>/android/app/src/main/java]
    #[arg(long = "java", value_hint = ValueHint::DirPath)]
    java: Option<PathBuf>,

    /// Glob locating the entry point inside the Java tree
    #[arg(long = "entry-point", default_value = "**/MainApplication.java")]
    entry_point: String,

    /// Register these families instead of the ones in the config file
    #[arg(short = 'f', long = "family", value_hint = ValueHint::Other)]
    families: Vec<String>,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,

    /// More log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl Cli {
    /// Log level requested on the command line. `RUST_LOG` still takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Parse CLI args, set up logging and run the registrar.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level());
    run_register(cli)
}

fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}

fn run_register(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    let families = resolve_families(&cli, &config)?;

    let reports = register_all(&config, &families)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    if cli.ndjson {
        write_ndjson(&reports, &mut handle)?;
    } else if cli.json {
        write_json_pretty(&reports, &mut handle)?;
    } else {
        write_plain(&reports, &mut handle, use_color)?;
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<RegistrarConfig> {
    let root = project_root(cli.root.clone())?;
    let mut config = RegistrarConfig::for_root(root)?
        .with_entry_point(EntryPointPattern::new(&cli.entry_point)?);

    if let Some(path) = &cli.config {
        config = config.with_config_file(path);
    }
    if let Some(path) = &cli.assets {
        config = config.with_asset_dir(path);
    }
    if let Some(path) = &cli.res {
        config = config.with_resource_dir(path);
    }
    if let Some(path) = &cli.java {
        config = config.with_java_dir(path);
    }

    Ok(config)
}

fn project_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = flag {
        return Ok(root);
    }

    match env::var_os(ROOT_ENV) {
        Some(raw) if !raw.is_empty() => Ok(PathBuf::from(raw)),
        _ => env::current_dir().context("resolving the current directory"),
    }
}

fn resolve_families(cli: &Cli, config: &RegistrarConfig) -> Result<Vec<String>> {
    if !cli.families.is_empty() {
        return Ok(cli.families.clone());
    }
    Ok(FontConfig::load(&config.config_file)?.font)
}

fn write_plain(reports: &[FamilyReport], mut w: impl Write, color: bool) -> Result<()> {
    for report in reports {
        let family = apply_color(&report.family, color, AnsiColor::Cyan);
        let (descriptor, descriptor_color) = describe_descriptor(&report.descriptor);
        let (patch, patch_color) = describe_patch(&report.patch);

        writeln!(
            w,
            "{family}: {} asset(s) copied, descriptor {}, entry point {}",
            report.copied.len(),
            apply_color(descriptor, color, descriptor_color),
            apply_color(&patch, color, patch_color),
        )?;
    }
    Ok(())
}

fn describe_descriptor(outcome: &DescriptorOutcome) -> (&'static str, AnsiColor) {
    match outcome {
        DescriptorOutcome::Generated { .. } => ("generated", AnsiColor::Green),
        DescriptorOutcome::AlreadyExists { .. } => ("kept", AnsiColor::Yellow),
        DescriptorOutcome::NoMatchingAssets => ("skipped (no matching assets)", AnsiColor::Yellow),
    }
}

fn describe_patch(outcome: &PatchOutcome) -> (String, AnsiColor) {
    match outcome {
        PatchOutcome::Registered { import_added, .. } => {
            let note = if *import_added { " (+import)" } else { "" };
            (format!("registered{note}"), AnsiColor::Green)
        }
        PatchOutcome::AlreadyRegistered { .. } => {
            ("already registered".to_string(), AnsiColor::Yellow)
        }
        PatchOutcome::Skipped { reason } => (format!("skipped: {reason}"), AnsiColor::Red),
    }
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
    Red,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
        AnsiColor::Red => "31",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}
