use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Direction the slides of a deck are laid out in.
///
/// Vertical is the desktop layout (slides stacked, progress bar on the
/// right); horizontal is the narrow-screen layout (slides side by side,
/// progress bar along the bottom).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub axis: Axis,
    pub show_progress: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            show_progress: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub posts_path: PathBuf,
    #[serde(default)]
    pub deck: DeckConfig,
}

impl Config {
    pub fn new(posts_path: PathBuf) -> Self {
        Self {
            posts_path,
            deck: DeckConfig::default(),
        }
    }

    /// Loads the config at `config_path`. A missing file is `Ok(None)`, not
    /// an error; `~` and environment variables in `posts_path` are expanded.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        Self::parse(&content)
            .map(Some)
            .map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.posts_path = Self::expand_path(&config.posts_path).unwrap_or(config.posts_path);
        Ok(config)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/postdeck");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/postdeck/config.toml"));
    }

    #[test]
    fn test_minimal_config_uses_deck_defaults() {
        let config = Config::parse("posts_path = \"/srv/blog/posts\"\n").unwrap();

        assert_eq!(config.posts_path, PathBuf::from("/srv/blog/posts"));
        assert_eq!(config.deck, DeckConfig::default());
        assert_eq!(config.deck.axis, Axis::Vertical);
        assert!(config.deck.show_progress);
    }

    #[test]
    fn test_deck_section_overrides() {
        let config = Config::parse(
            r#"
posts_path = "/srv/blog/posts"

[deck]
axis = "horizontal"
show_progress = false
"#,
        )
        .unwrap();

        assert_eq!(config.deck.axis, Axis::Horizontal);
        assert!(!config.deck.show_progress);
    }

    #[test]
    fn test_partial_deck_section_keeps_other_defaults() {
        let config = Config::parse("posts_path = \"p\"\n[deck]\naxis = \"horizontal\"\n").unwrap();

        assert_eq!(config.deck.axis, Axis::Horizontal);
        assert!(config.deck.show_progress);
    }

    #[test]
    fn test_unknown_axis_is_rejected() {
        assert!(Config::parse("posts_path = \"p\"\n[deck]\naxis = \"diagonal\"\n").is_err());
    }

    #[test]
    fn test_missing_posts_path_is_rejected() {
        assert!(Config::parse("[deck]\naxis = \"vertical\"\n").is_err());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(Path::new("~/blog/posts")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("blog/posts"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("POSTDECK_TEST_ROOT", "/custom/blog");
        }

        let config = Config::parse("posts_path = \"$POSTDECK_TEST_ROOT/posts\"\n").unwrap();
        assert_eq!(config.posts_path, PathBuf::from("/custom/blog/posts"));

        unsafe {
            env::remove_var("POSTDECK_TEST_ROOT");
        }
    }

    #[test]
    fn test_expand_path_leaves_plain_paths_alone() {
        assert_eq!(
            Config::expand_path(Path::new("/absolute/posts")),
            Some(PathBuf::from("/absolute/posts"))
        );
        assert_eq!(
            Config::expand_path(Path::new("relative/posts")),
            Some(PathBuf::from("relative/posts"))
        );
    }

    #[test]
    fn test_undefined_env_var_keeps_path_verbatim() {
        let config = Config::parse("posts_path = \"$POSTDECK_UNSET_VAR_XYZ/posts\"\n").unwrap();
        assert_eq!(
            config.posts_path,
            PathBuf::from("$POSTDECK_UNSET_VAR_XYZ/posts")
        );
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from_path(temp_dir.path().join("nonexistent.toml")).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "posts_path = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let mut config = Config::new(PathBuf::from("/tmp/test-posts"));
        config.deck.axis = Axis::Horizontal;

        config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded.posts_path, config.posts_path);
        assert_eq!(loaded.deck, config.deck);
    }
}
