use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;

use assetsuite::cli::{self as commands, Cli, Commands};
use assetsuite::config::Config;
use assetsuite::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = Printer::new().with_verbose(cli.verbose);
    let cwd = std::env::current_dir().map_err(assetsuite::AssetError::from)?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, &config, &printer)?,
        Commands::ExportSprites(args) => commands::export::run(args, &printer)?,
        Commands::SliceSheet(args) => commands::slice::run(args, &config, &printer)?,
        Commands::PackSheet(args) => commands::pack::run(args, &printer)?,
        Commands::Validate(args) => {
            commands::validate::run(args, &printer)?;
        }
        Commands::Completions(args) => commands::completions::run(args)?,
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise warn, or debug with --verbose.
fn init_tracing(verbose: bool) {
    let default = if verbose { "assetsuite=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
