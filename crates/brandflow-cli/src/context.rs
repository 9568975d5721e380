use crate::config::{CONFIG_FILE, Config};
use anyhow::{Context, Result};
use brandflow_engine::AnalyticsState;
use brandflow_types::AccountMode;
use chrono::NaiveDate;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    mode_override: Option<AccountMode>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, mode_override: Option<AccountMode>) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            mode_override,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    /// `--mode` wins over the configured default
    pub fn mode(&self) -> Result<AccountMode> {
        match self.mode_override {
            Some(mode) => Ok(mode),
            None => Ok(self.config()?.default_mode),
        }
    }

    /// Fresh analytics page with the configured preferences applied
    pub fn analytics(&self) -> Result<AnalyticsState> {
        let config = self.config()?;
        let mode = self.mode()?;
        let mut state = AnalyticsState::new(mode);

        state.filters_mut().set_currency(config.currency.clone());
        state.set_store_scope(config.store);
        state.set_channels(config.channels.clone());
        if let Some(preset) = &config.preset {
            state
                .columns_mut()
                .apply_preset(preset)
                .with_context(|| "Invalid preset in config")?;
        }

        debug!(%mode, "analytics state built");
        Ok(state)
    }
}

/// `--today` value or the local date
pub fn resolve_today(explicit: Option<&str>) -> Result<NaiveDate> {
    match explicit {
        Some(raw) => parse_date(raw),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::{Channel, StoreScope};
    use std::fs;
    use tempfile::TempDir;

    fn setup_test_context(config: &str, mode: Option<AccountMode>) -> (TempDir, ExecutionContext) {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().to_path_buf();
        fs::write(data_dir.join(CONFIG_FILE), config).unwrap();
        let ctx = ExecutionContext::new(data_dir, mode);
        (temp_dir, ctx)
    }

    #[test]
    fn test_config_is_loaded_lazily() {
        let (_temp_dir, ctx) = setup_test_context("currency = \"£\"\n", None);

        assert!(ctx.config.get().is_none(), "Config should not be loaded initially");
        assert_eq!(ctx.config().unwrap().currency, "£");
        assert!(ctx.config.get().is_some(), "Config should be loaded after access");
    }

    #[test]
    fn test_mode_flag_overrides_config() {
        let (_temp_dir, ctx) =
            setup_test_context("default_mode = \"both\"\n", Some(AccountMode::Vendor));
        assert_eq!(ctx.mode().unwrap(), AccountMode::Vendor);

        let (_temp_dir, ctx) = setup_test_context("default_mode = \"both\"\n", None);
        assert_eq!(ctx.mode().unwrap(), AccountMode::Both);
    }

    #[test]
    fn test_analytics_applies_preferences() {
        let (_temp_dir, ctx) = setup_test_context(
            r#"
currency = "€"
store = "shopify"
preset = "traffic"
channels = ["shopify", "walmart"]
"#,
            Some(AccountMode::Seller),
        );

        let state = ctx.analytics().unwrap();
        assert_eq!(state.filters().currency(), "€");
        assert_eq!(state.table().scope(), StoreScope::Shopify);
        assert_eq!(state.columns().active_preset(), Some("Traffic"));
        assert_eq!(state.channels().channels(), [Channel::Shopify, Channel::Walmart]);
    }

    #[test]
    fn test_unknown_preset_in_config_is_an_error() {
        let (_temp_dir, ctx) = setup_test_context("preset = \"margins\"\n", None);
        assert!(ctx.analytics().is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert!(parse_date("15/03/2025").is_err());
    }
}
