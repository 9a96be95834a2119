//! Configuration loading for Policheck

mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".policheckrc.json";

/// Find and load the config file. Searches `work_dir` then its parents;
/// when no file exists, defaults apply.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Search for .policheckrc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.threshold, None);
    }

    #[test]
    fn config_is_found_in_work_dir() {
        let dir = TempDir::new().unwrap();
        let mut file = fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(file, r#"{{"threshold": 70}}"#).unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.threshold, Some(70));
    }

    #[test]
    fn config_is_found_in_parent_dir() {
        let dir = TempDir::new().unwrap();
        let mut file = fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(file, r#"{{"timeoutSecs": 3}}"#).unwrap();

        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested, None).unwrap();
        assert_eq!(config.timeout_secs, Some(3));
    }

    #[test]
    fn custom_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let result = load_config(dir.path(), Some(Path::new("nope.json")));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "{not json").unwrap();

        let result = load_config(dir.path(), None);
        assert!(result.is_err());
    }
}
