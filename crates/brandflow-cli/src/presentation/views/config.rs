use std::fmt;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, CreateView, GuidanceViewModel, ViewMode,
};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File:          {}", self.data.path)?;
        writeln!(f, "default_mode:  {}", self.data.default_mode)?;
        writeln!(f, "currency:      {}", self.data.currency)?;
        writeln!(f, "store:         {}", self.data.store)?;
        writeln!(
            f,
            "preset:        {}",
            self.data.preset.as_deref().unwrap_or("(none)")
        )?;
        writeln!(f, "channels:      {}", self.data.channels.join(", "))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wrote {}", self.data.path)
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "brandflow - seller and vendor analytics\n")?;
        writeln!(f, "Account mode: {}", self.data.mode)?;
        writeln!(
            f,
            "{} filters, {} metrics, {} products available",
            self.data.filter_count, self.data.metric_count, self.data.product_count
        )?;
        if !self.data.config_exists {
            writeln!(f, "No config file yet; defaults are in use.")?;
        }
        Ok(())
    }
}
