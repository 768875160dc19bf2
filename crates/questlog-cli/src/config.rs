//! CLI configuration.
//!
//! An optional `questlog.toml` in the current directory sets the default
//! save file location; `--file` on the command line overrides it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level questlog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestlogConfig {
    /// Where engine state is saved and loaded.
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,
}

fn default_save_path() -> PathBuf {
    PathBuf::from("questlog.json")
}

impl Default for QuestlogConfig {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
        }
    }
}

/// Load `questlog.toml` from the current directory, falling back to
/// defaults if it is absent or unreadable (a broken config should not make
/// read-only commands fail; it is logged instead).
pub fn load_config() -> QuestlogConfig {
    let path = PathBuf::from("questlog.toml");
    if !path.exists() {
        return QuestlogConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring malformed questlog.toml: {e}");
                QuestlogConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("could not read questlog.toml: {e}");
            QuestlogConfig::default()
        }
    }
}

/// Pick the save file: explicit `--file` wins over the config default.
pub fn resolve_save_file(cli_override: Option<PathBuf>) -> PathBuf {
    cli_override.unwrap_or_else(|| load_config().save_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_save_path_is_questlog_json() {
        let config = QuestlogConfig::default();
        assert_eq!(config.save_path, PathBuf::from("questlog.json"));
    }

    #[test]
    fn cli_override_wins() {
        let resolved = resolve_save_file(Some(PathBuf::from("/tmp/other.json")));
        assert_eq!(resolved, PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn parse_config() {
        let config: QuestlogConfig = toml::from_str("save_path = \"saves/my.json\"").unwrap();
        assert_eq!(config.save_path, PathBuf::from("saves/my.json"));
    }
}
