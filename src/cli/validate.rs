//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::codec::{read_items_file, read_sheet_file};
use crate::error::{AssetError, Result};
use crate::output::{display_path, Printer};
use crate::validation::{print_diagnostics, validate_legacy_pair, ValidationResult};

/// Check a legacy item list against its sprites
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Legacy item list (items.json)
    #[arg(long)]
    pub items: PathBuf,

    /// Sprite sheet holding the item sprites
    #[arg(long)]
    pub sheet: PathBuf,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<ValidationResult> {
    printer.status(
        "Checking",
        &format!("{} against {}", display_path(&args.items), display_path(&args.sheet)),
    );

    let items = read_items_file(&args.items)?;
    let sprites = read_sheet_file(&args.sheet)?;

    let result = validate_legacy_pair(&items, &sprites);
    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(AssetError::Validation {
            message: format!("{} error(s) in {}", result.error_count(), display_path(&args.items)),
            help: Some("Fix the diagnostics listed above".to_string()),
        });
    }
    Ok(result)
}
