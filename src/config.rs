use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::filename::DEFAULT_MAX_FILENAME_LENGTH;
use crate::trial::DEFAULT_TRIAL_BUFFER_SIZE;
use crate::writers::ShortcutWriter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bytes retained for rewinding while detecting the format of a stream.
    pub trial_buffer_size: usize,
    /// Longest file name, extension included, generated for new shortcuts.
    pub max_filename_length: usize,
    /// Writer used when none is requested explicitly.
    pub default_writer: ShortcutWriter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trial_buffer_size: DEFAULT_TRIAL_BUFFER_SIZE,
            max_filename_length: DEFAULT_MAX_FILENAME_LENGTH,
            default_writer: ShortcutWriter::Url,
        }
    }
}

impl Config {
    pub fn load(custom_path: Option<PathBuf>) -> Self {
        let config_path = custom_path.unwrap_or_else(Self::config_path);

        if config_path.exists() {
            match fs::read_to_string(&config_path) {
                Ok(contents) => match toml::from_str::<Config>(&contents) {
                    Ok(config) => return config,
                    Err(err) => debug!("Ignoring invalid config {}: {err}", config_path.display()),
                },
                Err(err) => debug!("Failed to read config {}: {err}", config_path.display()),
            }
        }

        // Return default config if file doesn't exist or can't be parsed
        Self::default()
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(config_path, toml_string)?;

        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("webshortcut")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ConfigEnvGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.trial_buffer_size, 8192);
        assert_eq!(config.max_filename_length, 100);
        assert_eq!(config.default_writer, ShortcutWriter::Url);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            default_writer: ShortcutWriter::WeblocXml,
            ..Config::default()
        };

        let toml_string = toml::to_string(&config).unwrap();
        assert!(toml_string.contains("default_writer = \"webloc-xml\""));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("max_filename_length = 40").unwrap();
        assert_eq!(config.max_filename_length, 40);
        assert_eq!(config.trial_buffer_size, DEFAULT_TRIAL_BUFFER_SIZE);
    }

    #[test]
    fn test_load_custom_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let contents = "trial_buffer_size = 512\ndefault_writer = \"desktop\"\n";
        fs::write(&path, contents).unwrap();

        let config = Config::load(Some(path));
        assert_eq!(config.trial_buffer_size, 512);
        assert_eq!(config.default_writer, ShortcutWriter::Desktop);
    }

    #[test]
    fn test_load_invalid_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_writer = \"website\"\n").unwrap();

        assert_eq!(Config::load(Some(path)), Config::default());
    }

    #[test]
    #[serial]
    #[cfg(target_os = "linux")]
    fn test_config_path_follows_xdg_config_home() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = ConfigEnvGuard::set(temp_dir.path());

        let path = Config::config_path();
        assert!(path.starts_with(temp_dir.path()));
        assert!(path.ends_with("webshortcut/config.toml"));

        Config::default().save().unwrap();
        assert_eq!(Config::load(None), Config::default());
    }
}
