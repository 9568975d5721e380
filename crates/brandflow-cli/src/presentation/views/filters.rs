use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{
    FilterCatalogViewModel, FilterChipsViewModel, FilterPreviewViewModel, ViewMode,
};

// --------------------------------------------------------
// Filter Catalog View
// --------------------------------------------------------

pub struct FilterCatalogView<'a> {
    data: &'a FilterCatalogViewModel,
    mode: ViewMode,
}

impl<'a> FilterCatalogView<'a> {
    pub fn new(data: &'a FilterCatalogViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for FilterCatalogView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for section in &self.data.sections {
                for entry in &section.entries {
                    writeln!(f, "{}", entry.key)?;
                }
            }
            return Ok(());
        }

        for section in &self.data.sections {
            writeln!(f, "{}", section.label.to_uppercase().bold())?;
            for entry in &section.entries {
                let badge = if entry.badge > 0 {
                    format!(" ({})", entry.badge)
                } else {
                    String::new()
                };
                if self.mode == ViewMode::Verbose {
                    writeln!(
                        f,
                        "  {:<28} {:<24} {:<7}{}",
                        entry.label, entry.key, entry.filter_type, badge
                    )?;
                } else {
                    writeln!(f, "  {}{}", entry.label, badge)?;
                }
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Filter Chips View
// --------------------------------------------------------

pub struct FilterChipsView<'a> {
    data: &'a FilterChipsViewModel,
    mode: ViewMode,
}

impl<'a> FilterChipsView<'a> {
    pub fn new(data: &'a FilterChipsViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for FilterChipsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let shown = &self.data.chips[..self.data.visible.min(self.data.chips.len())];

        match self.mode {
            ViewMode::Minimal => {
                for chip in shown {
                    writeln!(f, "{}", chip.text)?;
                }
            }
            ViewMode::Compact | ViewMode::Standard => {
                let chips: Vec<String> = shown.iter().map(|c| format!("[{} ×]", c.text)).collect();
                write!(f, "{}", chips.join(" "))?;
                if let Some(toggle) = &self.data.toggle_label {
                    write!(f, " {}", format!("({})", toggle).cyan())?;
                }
                writeln!(f)?;
            }
            ViewMode::Verbose => {
                writeln!(
                    f,
                    "Mode: {}  Row width: {}",
                    self.data.mode, self.data.row_width
                )?;
                for (idx, chip) in self.data.chips.iter().enumerate() {
                    let state = if idx < self.data.visible {
                        "shown"
                    } else {
                        "hidden"
                    };
                    writeln!(
                        f,
                        "  {:<24} {:>4}  {:<6}  {}",
                        chip.key, chip.width, state, chip.text
                    )?;
                }
                if let Some(toggle) = &self.data.toggle_label {
                    writeln!(f, "  toggle: {}", toggle)?;
                }
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Filter Preview View
// --------------------------------------------------------

pub struct FilterPreviewView<'a> {
    data: &'a FilterPreviewViewModel,
}

impl<'a> FilterPreviewView<'a> {
    pub fn new(data: &'a FilterPreviewViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for FilterPreviewView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({})", self.data.label.bold(), self.data.filter_type)?;

        if !self.data.options.is_empty() {
            writeln!(f, "Options:")?;
            for option in &self.data.options {
                let check = if option.selected { "[x]" } else { "[ ]" };
                writeln!(f, "  {} {}", check, option.value)?;
            }
        }

        if !self.data.operators.is_empty() {
            writeln!(f, "Operators: {}", self.data.operators.join(", "))?;
        }
        if let Some(hint) = &self.data.input_hint {
            writeln!(f, "Input: {}", hint)?;
        }
        if let Some(preview) = &self.data.match_preview {
            writeln!(f, "Matches: {}", preview)?;
        }

        writeln!(f, "\nChip: {}", self.data.chip)
    }
}
