use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Default number of records shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Path of the flat data file. Relative paths resolve against the
    /// current working directory.
    #[serde(default = "Config::default_data_file")]
    pub data_file: PathBuf,
    /// Records per page in the interactive display.
    #[serde(default = "Config::default_page_size")]
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::default_data_file(),
            page_size: Self::default_page_size(),
        }
    }
}

impl Config {
    fn default_data_file() -> PathBuf {
        PathBuf::from("phone_book.txt")
    }

    const fn default_page_size() -> usize {
        DEFAULT_PAGE_SIZE
    }

    /// Load the config from `~/.phonebook/config.json`.
    ///
    /// A missing config file is not an error; defaults apply. A present but
    /// unparsable or invalid file is.
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(".phonebook");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values the rest of the program is allowed to assume away.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        Ok(())
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(".phonebook");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write a template config file, refusing to clobber an existing one.
    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "data_file": "phone_book.txt",
  "page_size": 10
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Point data_file at your phone book file (default: ./phone_book.txt)");
        println!("   2. Run 'phonebook run' to start the interactive session");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("phone_book.txt"));
        assert_eq!(config.page_size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"page_size": 5}"#).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.data_file, PathBuf::from("phone_book.txt"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config: Config = serde_json::from_str(r#"{"page_size": 0}"#).unwrap();
        assert!(config.validate().is_err());
    }
}
