use std::io;
use std::path::Path;

use tessera_core::{Result, config};

/// Creates the default configuration file at `~/.config/tessera/`.
///
/// An existing file is never overwritten.
pub fn execute() -> Result<()> {
    let Some(dir) = config::config_dir() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "could not determine home directory",
        )
        .into());
    };

    std::fs::create_dir_all(&dir)?;
    write_if_missing(&dir.join("config.toml"), &config::template::generate_config())
}

/// Writes content to a file only if it doesn't already exist.
fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("Already exists: {}", path.display());
        return Ok(());
    }

    std::fs::write(path, content)?;
    println!("Created {}", path.display());
    Ok(())
}
