//! Command implementations.

pub mod config;
pub mod generate;
pub mod serve;
pub mod types;

use alttext_core::Config;
use std::path::PathBuf;

/// Expand `~` in a user-supplied config path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Load configuration.
///
/// An explicit path that exists must load cleanly (a missing one means
/// defaults, so `config init --config <path>` can create it). The default
/// location falls back to built-in defaults with a warning instead.
pub fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        let path = expand_path(path);
        if !path.exists() {
            return Ok(Config::default());
        }
        return Config::load_from(&path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()));
    }

    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `alttext config path`."
            );
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_passes_absolute_paths_through() {
        assert_eq!(expand_path("/etc/alttext.toml"), PathBuf::from("/etc/alttext.toml"));
    }

    #[test]
    fn test_explicit_missing_config_uses_defaults() {
        let config = load_config(Some("/definitely/not/here/alttext.toml")).unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_explicit_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[llm]\nprovider = \"gemini\"\n").unwrap();
        let err = load_config(path.to_str()).unwrap_err();
        assert!(err.to_string().contains("gemini"));
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9200\n").unwrap();
        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.server.port, 9200);
    }
}
