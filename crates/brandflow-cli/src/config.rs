use anyhow::{Context, Result};
use brandflow_types::{AccountMode, Channel, StoreScope};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory holding `config.toml`:
/// 1. Explicit path (with tilde expansion)
/// 2. BRANDFLOW_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.brandflow
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("BRANDFLOW_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("brandflow"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".brandflow"));
    }

    anyhow::bail!("Could not determine data directory: no HOME or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// User preferences. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_mode: AccountMode,
    pub currency: String,
    pub store: StoreScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    pub channels: Vec<Channel>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: AccountMode::Seller,
            currency: "$".to_string(),
            store: StoreScope::Both,
            preset: None,
            channels: vec![Channel::Amazon],
        }
    }
}

impl Config {
    /// Missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_mode, AccountMode::Seller);
        assert_eq!(config.currency, "$");
        assert_eq!(config.channels, vec![Channel::Amazon]);
    }

    #[test]
    fn test_missing_file_is_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join(CONFIG_FILE))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        let config = Config {
            default_mode: AccountMode::Vendor,
            currency: "€".to_string(),
            store: StoreScope::Amazon,
            preset: Some("Advertising".to_string()),
            channels: vec![Channel::Amazon, Channel::Walmart],
        };
        config.save_to(&config_path)?;

        assert_eq!(Config::load_from(&config_path)?, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "default_mode = \"both\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.default_mode, AccountMode::Both);
        assert_eq!(config.currency, "$");
        Ok(())
    }

    #[test]
    fn test_invalid_file_names_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "default_mode = \"wholesale\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid config file"));
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_data_dir(Some("/tmp/brandflow-explicit"))?;
        assert_eq!(path, PathBuf::from("/tmp/brandflow-explicit"));
        Ok(())
    }
}
