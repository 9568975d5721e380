use std::path::Path;

use crate::args::hints::cmd;
use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, GuidanceViewModel,
    StatusBadge,
};

pub fn present_config(config: &Config, path: &Path) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        default_mode: config.default_mode.as_str().to_string(),
        currency: config.currency.clone(),
        store: config.store.to_string(),
        preset: config.preset.clone(),
        channels: config.channels.iter().map(|c| c.label().to_string()).collect(),
    };

    let mut result = CommandResultViewModel::new(content);
    if !exists {
        result = result
            .with_badge(StatusBadge::info("Using defaults (no config file)"))
            .with_suggestion(Guidance::new("Write a config file").with_command(cmd::CONFIG_INIT));
    }
    result
}

pub fn present_config_init(path: &Path, overwritten: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    let label = if overwritten {
        "Configuration reset"
    } else {
        "Configuration created"
    };
    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::success(label))
    .with_suggestion(Guidance::new("Review the settings").with_command(cmd::CONFIG_SHOW))
}

pub fn present_guidance(content: GuidanceViewModel) -> CommandResultViewModel<GuidanceViewModel> {
    let mut result = CommandResultViewModel::new(content);

    if !result.content.config_exists {
        result = result.with_suggestion(
            Guidance::new("Save your preferences").with_command(cmd::CONFIG_INIT),
        );
    }

    result.with_suggestions(vec![
        Guidance::new("Open the dashboard").with_command(cmd::DASHBOARD),
        Guidance::new("Show the product table").with_command(cmd::PRODUCTS),
        Guidance::new("Browse metrics").with_command(cmd::METRICS_LIST),
        Guidance::new("Browse filters").with_command(cmd::FILTERS_CATALOG),
        Guidance::new("Pick table columns").with_command(cmd::COLUMNS_LIST),
    ])
}
