use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{CreateView, PeriodViewModel, ViewMode};

impl CreateView for PeriodViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(PeriodView { data: self, mode })
    }
}

struct PeriodView<'a> {
    data: &'a PeriodViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for PeriodView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{} {}", self.data.from, self.data.to),
            ViewMode::Compact => writeln!(f, "{}: {}", self.data.label, self.data.range),
            ViewMode::Standard | ViewMode::Verbose => {
                writeln!(f, "{}: {}\n", self.data.label, self.data.range)?;
                for preset in &self.data.presets {
                    let line = format!("{:<14} {:<14} {}", preset.name, preset.label, preset.range);
                    if preset.active {
                        writeln!(f, "* {}", line.bold())?;
                    } else {
                        writeln!(f, "  {}", line)?;
                    }
                }
                Ok(())
            }
        }
    }
}
