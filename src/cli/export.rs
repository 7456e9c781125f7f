//! Export-sprites command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::codec::read_sheet_file;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::export_sprites;

/// Decode a sprite sheet into PNG files
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Sprite sheet to decode
    #[arg(long)]
    pub sheet: PathBuf,

    /// Output directory for sprite_NNNN.png files
    #[arg(long, short)]
    pub out: PathBuf,

    /// Put each sprite in its own sub-directory named after its id
    #[arg(long)]
    pub split: bool,
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    printer.status("Decoding", &display_path(&args.sheet));
    let sprites = read_sheet_file(&args.sheet)?;

    if let Some(first) = sprites.first() {
        printer.verbose("Size", &format!("{}x{}", first.width(), first.height()));
    }

    let written = export_sprites(&sprites, &args.out, args.split)?;
    printer.success(
        "Exported",
        &format!(
            "{} to {}",
            plural(written.len(), "sprite", "sprites"),
            display_path(&args.out)
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::write_sheet_file;
    use crate::types::Sprite;

    #[test]
    fn test_export_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = dir.path().join("a.sheet");
        let sprites: Vec<Sprite> = (1..=3)
            .map(|id| Sprite::new(id, 1, 1, vec![id as u8, 0, 0, 255]).unwrap())
            .collect();
        write_sheet_file(&sheet, &sprites).unwrap();

        let out = dir.path().join("png");
        run(
            ExportArgs {
                sheet,
                out: out.clone(),
                split: true,
            },
            &Printer::new(),
        )
        .unwrap();

        assert!(out.join("3").join("sprite_0003.png").is_file());
    }

    #[test]
    fn test_export_missing_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            ExportArgs {
                sheet: dir.path().join("missing.sheet"),
                out: dir.path().join("png"),
                split: false,
            },
            &Printer::new(),
        );
        assert!(result.is_err());
        assert!(!dir.path().join("png").exists());
    }
}
