pub mod completions;
pub mod convert;
pub mod export;
pub mod pack;
pub mod slice;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// assetsuite - V11 ↔ legacy game asset converter
#[derive(Parser, Debug)]
#[command(name = "assetsuite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ./assetsuite.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert assets between the V11 and legacy layouts
    Convert(convert::ConvertArgs),

    /// Decode a sprite sheet into PNG files
    ExportSprites(export::ExportArgs),

    /// Slice a PNG into tiles and pack them into a sprite sheet
    SliceSheet(slice::SliceArgs),

    /// Pack a directory of same-size PNGs into a sprite sheet
    PackSheet(pack::PackArgs),

    /// Check a legacy item list against its sprites
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "assetsuite",
            "export-sprites",
            "--sheet",
            "a.sheet",
            "--out",
            "png",
            "--verbose",
            "--config",
            "other.yaml",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("other.yaml")));
        assert!(matches!(cli.command, Commands::ExportSprites(_)));
    }

    #[test]
    fn test_unknown_target_rejected() {
        let result = Cli::try_parse_from(["assetsuite", "convert", "--to", "v9", "--out", "x"]);
        assert!(result.is_err());
    }
}
