use std::path::{Path, PathBuf};

use clap::Args;

use tessera_core::config::OutputFormat;
use tessera_core::layout::{self, Format};
use tessera_core::{Rectangles, Result, Vector};

/// Arguments for the `translate` subcommand.
#[derive(Args)]
pub struct TranslateArgs {
    /// Layout file (.toml or .json)
    file: PathBuf,
    /// Horizontal offset
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    dx: i32,
    /// Vertical offset
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    dy: i32,
}

pub fn translate(args: &TranslateArgs, format: OutputFormat) -> Result<()> {
    let rects = layout::load(&args.file)?;
    print(&rects.checked_translate(Vector::new(args.dx, args.dy))?, format)
}

pub fn reflect(file: &Path, format: OutputFormat) -> Result<()> {
    let rects = layout::load(file)?;
    print(&rects.reflection(), format)
}

/// Prints a sequence in layout-file form so it can be fed back in.
fn print(rects: &Rectangles, format: OutputFormat) -> Result<()> {
    let format = match format {
        OutputFormat::Text => Format::Toml,
        OutputFormat::Json => Format::Json,
    };
    print!("{}", layout::render(rects, format)?);
    if format == Format::Json {
        println!();
    }
    Ok(())
}
