//! Validation for legacy item/sprite pairs.
//!
//! Runs a suite of structural checks and reports errors and warnings. Used
//! by `assetsuite validate` and after `convert --to legacy`.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::types::{ItemType, Sprite};

/// Run every check against an item list and its sprites.
pub fn validate_legacy_pair(items: &[ItemType], sprites: &[Sprite]) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_sprites_present(sprites));
    result.merge(checks::check_items_present(items));
    result.merge(checks::check_sprite_dimensions(sprites));
    result.merge(checks::check_frame_attributes(items));
    result.merge(checks::check_client_ids(items));
    result.merge(checks::check_sprite_sequence(sprites));

    result
}

/// Print diagnostics and a summary line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!("validation: {} error(s), {} warning(s)", errors, warnings),
        );
    } else if warnings > 0 {
        printer.warning("Passed", &format!("validation ({} warning(s))", warnings));
    } else {
        printer.success("Passed", "validation");
    }
}
