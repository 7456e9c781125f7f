//! Pack-sheet command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::codec::write_sheet_file;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{find_files, load_png_sprites};

/// Pack a directory of same-size PNGs into a sprite sheet
#[derive(Args, Debug)]
pub struct PackArgs {
    /// Directory of PNG files, packed in file-name order
    #[arg(long)]
    pub png_dir: PathBuf,

    /// Sprite sheet to write
    #[arg(long, short)]
    pub out: PathBuf,
}

pub fn run(args: PackArgs, printer: &Printer) -> Result<()> {
    let paths = find_files(&args.png_dir, "png")?;
    printer.status(
        "Loading",
        &format!(
            "{} from {}",
            plural(paths.len(), "PNG", "PNGs"),
            display_path(&args.png_dir)
        ),
    );

    let sprites = load_png_sprites(&paths)?;
    write_sheet_file(&args.out, &sprites)?;

    printer.success(
        "Packed",
        &format!(
            "{} into {}",
            plural(sprites.len(), "sprite", "sprites"),
            display_path(&args.out)
        ),
    );
    Ok(())
}
