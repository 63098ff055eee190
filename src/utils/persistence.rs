//! Paths and file helpers for ~/.flappy/.

use crate::core::config::{ConfigError, FlightConfig};
use crate::core::constants::CONFIG_FILE_NAME;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.flappy/ directory path, creating it if needed.
pub fn flappy_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".flappy");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.flappy/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(flappy_dir()?.join(filename))
}

/// Load the tuning config from `path`, or from ~/.flappy/config.json when no
/// path is given.
pub fn load_config(path: Option<&Path>) -> Result<FlightConfig, ConfigError> {
    match path {
        Some(path) => FlightConfig::load(path),
        None => FlightConfig::load(&data_path(CONFIG_FILE_NAME)?),
    }
}

/// Write a config as pretty-printed JSON, returning where it went.
pub fn save_config(path: Option<&Path>, config: &FlightConfig) -> io::Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => data_path(CONFIG_FILE_NAME)?,
    };
    fs::write(&path, config.to_json())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir().join("flappy_persistence_roundtrip.json");
        let config = FlightConfig {
            gravity: 900.0,
            ..Default::default()
        };
        let written = save_config(Some(&path), &config).expect("save should succeed");
        assert_eq!(written, path);

        let loaded = load_config(Some(&path)).expect("load should succeed");
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_file_is_error() {
        let path = std::env::temp_dir().join("flappy_persistence_invalid.json");
        fs::write(&path, r#"{ "viewport_width": 0.0 }"#).unwrap();
        assert!(load_config(Some(&path)).is_err());
        let _ = fs::remove_file(&path);
    }
}
