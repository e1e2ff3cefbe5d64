//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing sections and keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Load config from `path` if the file exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> LoadResult<GameConfig> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(GameConfig::default())
        }
    }

    /// Parse config from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use game_core::{MissPolicy, PointerPlacement, WheelConfig};

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[wheel]
pointer = "left"
max_laps = 9

[battle]
miss_policy = "opponent_scores"
"#
        )
        .unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.wheel.pointer, PointerPlacement::Left);
        assert_eq!(config.wheel.max_laps, 9);
        assert_eq!(config.wheel.min_laps, WheelConfig::DEFAULT_MIN_LAPS);
        assert_eq!(config.battle.miss_policy, MissPolicy::OpponentScores);
        assert_eq!(config.battle.advance_delay_ms, 1500);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(
            ConfigLoader::load_or_default(&path).unwrap(),
            GameConfig::default()
        );
        assert!(ConfigLoader::load(&path).is_err());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = ConfigLoader::parse("[wheel]\npointer = \"diagonal\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
