use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Config;
use crate::{GeometryError, Result};

/// Returns the config directory: `~/.config/tessera/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("tessera"))
}

/// Returns the config file path: `~/.config/tessera/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse a config file.
///
/// After parsing, values are normalised via [`Config::validate`].
pub fn try_load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)?;
    config.validate();
    Ok(config)
}

/// Loads a config file, falling back to defaults.
///
/// A missing file silently returns defaults; any other failure is
/// reported on stderr before falling back.
pub fn load_from(path: &Path) -> Config {
    match try_load_from(path) {
        Ok(config) => config,
        Err(GeometryError::Io(e)) if e.kind() == ErrorKind::NotFound => Config::default(),
        Err(e) => {
            eprintln!("Warning: failed to load {}: {e}", path.display());
            Config::default()
        }
    }
}

/// Loads `~/.config/tessera/config.toml`, falling back to defaults.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}
