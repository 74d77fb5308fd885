use std::path::Path;

use serde_json::json;

use tessera_core::config::OutputFormat;
use tessera_core::{Result, layout, merge_all};

/// Folds the layout at `file` into one rectangle and prints it.
pub fn execute(file: &Path, format: OutputFormat) -> Result<()> {
    let rects = layout::load(file)?;
    let merged = merge_all(&rects)?;

    match format {
        OutputFormat::Text => {
            println!("merged {} rectangles: {merged}", rects.size());
            println!("area: {}", merged.area());
        }
        OutputFormat::Json => {
            let value = json!({
                "x": merged.pos().x(),
                "y": merged.pos().y(),
                "width": merged.width(),
                "height": merged.height(),
                "area": merged.area(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
