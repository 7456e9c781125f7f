//! Convert command implementation.
//!
//! `--to legacy` reads an appearance document plus a directory of sprite
//! sheets and writes a legacy item list with numbered PNG sprites.
//! `--to v11` goes the other way, from an item list and PNG sprites to an
//! appearance document and a single sheet.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use tracing::debug;

use crate::codec::{read_appearances_file, read_items_file};
use crate::config::Config;
use crate::error::{AssetError, Result};
use crate::legacy::MapOptions;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{
    convert_to_legacy, convert_to_v11, find_files, load_png_sprites, load_sprite_pool,
    write_legacy_bundle, write_v11_bundle, LegacyBundle,
};
use crate::validation::{print_diagnostics, validate_legacy_pair, ValidationResult};

/// Conversion direction.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Appearances + sheets → items.json + PNG sprites
    Legacy,
    /// items.json + PNG sprites → appearances.json + sprites.sheet
    V11,
}

/// Convert assets between the V11 and legacy layouts
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Layout to produce
    #[arg(long, value_enum)]
    pub to: Target,

    /// Appearance document (with --to legacy)
    #[arg(long)]
    pub appearances: Option<PathBuf>,

    /// Directory of sprite sheets, read in file-name order (with --to legacy)
    #[arg(long)]
    pub sheets: Option<PathBuf>,

    /// Legacy item list (with --to v11)
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// Directory of PNG sprites, read in file-name order (with --to v11)
    #[arg(long)]
    pub png_dir: Option<PathBuf>,

    /// Output directory (default: `output` from the config)
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Use each frame's own duration
    #[arg(long, overrides_with = "no_frame_durations")]
    pub frame_durations: bool,

    /// Use each group's default duration for every frame
    #[arg(long, overrides_with = "frame_durations")]
    pub no_frame_durations: bool,

    /// Map every frame of each frame group
    #[arg(long, overrides_with = "no_frame_groups")]
    pub frame_groups: bool,

    /// Map only the first frame of each frame group
    #[arg(long, overrides_with = "frame_groups")]
    pub no_frame_groups: bool,

    /// Mark items without frames as Static
    #[arg(long, overrides_with = "no_idle_as_static")]
    pub idle_as_static: bool,

    /// Keep the type of items without frames
    #[arg(long, overrides_with = "idle_as_static")]
    pub no_idle_as_static: bool,
}

impl ConvertArgs {
    /// Config options with command-line overrides applied.
    fn map_options(&self, config: &Config) -> MapOptions {
        let mut options = config.map_options();
        override_flag(&mut options.enable_frame_durations, self.frame_durations, self.no_frame_durations);
        override_flag(&mut options.enable_frame_groups, self.frame_groups, self.no_frame_groups);
        override_flag(&mut options.idle_animation_as_static, self.idle_as_static, self.no_idle_as_static);
        options
    }
}

/// Apply an `--x` / `--no-x` pair; clap keeps at most one of them set.
fn override_flag(value: &mut bool, on: bool, off: bool) {
    if on {
        *value = true;
    } else if off {
        *value = false;
    }
}

pub fn run(args: ConvertArgs, config: &Config, printer: &Printer) -> Result<()> {
    let out = args.out.clone().unwrap_or_else(|| config.output.clone());
    match args.to {
        Target::Legacy => run_legacy(&args, config, &out, printer),
        Target::V11 => run_v11(&args, &out, printer),
    }
}

fn run_legacy(args: &ConvertArgs, config: &Config, out: &Path, printer: &Printer) -> Result<()> {
    let appearances_path = required(&args.appearances, "--appearances", "legacy")?;
    let sheets_dir = required(&args.sheets, "--sheets", "legacy")?;
    let options = args.map_options(config);
    debug!(?options, "mapping options");

    printer.status("Loading", &display_path(appearances_path));
    let appearances = read_appearances_file(appearances_path)?;

    let sheet_paths = find_files(sheets_dir, &config.sheet_extension)?;
    if sheet_paths.is_empty() {
        printer.warning(
            "Warning",
            &format!(
                "no .{} files in {}",
                config.sheet_extension,
                display_path(sheets_dir)
            ),
        );
    }
    for path in &sheet_paths {
        printer.verbose("Sheet", &display_path(path));
    }
    let pool = load_sprite_pool(&sheet_paths)?;
    printer.info(
        "Loaded",
        &format!(
            "{} and {} from {}",
            plural(appearances.len(), "appearance", "appearances"),
            plural(pool.len(), "sprite", "sprites"),
            plural(sheet_paths.len(), "sheet", "sheets"),
        ),
    );

    let bundle = convert_to_legacy(&appearances, &pool, options)?;

    if !bundle.dangling.is_empty() {
        printer.warning(
            "Warning",
            &format!(
                "{} skipped (no such sprite)",
                plural(bundle.dangling.len(), "sprite reference", "sprite references")
            ),
        );
        for d in &bundle.dangling {
            printer.verbose(
                "Dangling",
                &format!(
                    "appearance {} group {} frame {} -> sprite {}",
                    d.appearance_id, d.group_index, d.frame_index, d.sprite_id
                ),
            );
        }
    }

    write_legacy_bundle(&bundle, out)?;
    printer.success(
        "Finished",
        &format!(
            "{} and {} in {}",
            plural(bundle.items.len(), "item", "items"),
            plural(bundle.sprites.len(), "sprite", "sprites"),
            display_path(out)
        ),
    );

    check_legacy_output(&bundle, printer);
    Ok(())
}

/// Validate what was just written. Problems are reported, not fatal: the
/// files are already on disk.
fn check_legacy_output(bundle: &LegacyBundle, printer: &Printer) -> ValidationResult {
    let report = validate_legacy_pair(&bundle.items, &bundle.sprites);
    if !report.is_ok() {
        print_diagnostics(&report, printer);
    }
    report
}

fn run_v11(args: &ConvertArgs, out: &Path, printer: &Printer) -> Result<()> {
    let items_path = required(&args.items, "--items", "v11")?;
    let png_dir = required(&args.png_dir, "--png-dir", "v11")?;

    printer.status("Loading", &display_path(items_path));
    let items = read_items_file(items_path)?;
    let png_paths = find_files(png_dir, "png")?;
    let sprites = load_png_sprites(&png_paths)?;
    printer.info(
        "Loaded",
        &format!(
            "{} and {}",
            plural(items.len(), "item", "items"),
            plural(sprites.len(), "sprite", "sprites")
        ),
    );

    let bundle = convert_to_v11(&items, &sprites)?;
    write_v11_bundle(&bundle, out)?;

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(bundle.appearances.len(), "appearance", "appearances"),
            display_path(out)
        ),
    );
    Ok(())
}

fn required<'a>(value: &'a Option<PathBuf>, flag: &str, target: &str) -> Result<&'a Path> {
    value.as_deref().ok_or_else(|| AssetError::Parse {
        message: format!("{} is required with --to {}", flag, target),
        help: Some(format!("Pass {} <PATH>", flag)),
    })
}
