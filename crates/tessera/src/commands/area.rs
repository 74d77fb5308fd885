use std::path::Path;

use serde_json::json;

use tessera_core::config::OutputFormat;
use tessera_core::{Result, layout};

pub fn execute(file: &Path, format: OutputFormat) -> Result<()> {
    let rects = layout::load(file)?;

    match format {
        OutputFormat::Text => {
            for (i, rect) in rects.iter().enumerate() {
                println!("{i}: {rect}  area {}", rect.area());
            }
            println!("total: {}", rects.total_area());
        }
        OutputFormat::Json => {
            let areas: Vec<_> = rects.iter().map(|r| r.area()).collect();
            // u128 totals are emitted as strings; serde_json numbers stop at 64 bits.
            let value = json!({
                "areas": areas,
                "total": rects.total_area().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
