use std::fmt;

use crate::presentation::view_models::{ColumnListViewModel, ViewMode};

pub struct ColumnListView<'a> {
    data: &'a ColumnListViewModel,
    mode: ViewMode,
}

impl<'a> ColumnListView<'a> {
    pub fn new(data: &'a ColumnListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for col in self.data.columns.iter().filter(|c| c.visible) {
            writeln!(f, "{}", col.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut category = "";
        for col in &self.data.columns {
            if col.category != category {
                category = &col.category;
                writeln!(f, "{}", category)?;
            }
            let lock = if col.locked { " (locked)" } else { "" };
            writeln!(f, "  {} {}{}", check(col.visible), col.label, lock)?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Mode: {}", self.data.mode)?;
        writeln!(
            f,
            "Preset: {}",
            self.data.active_preset.as_deref().unwrap_or("(custom)")
        )?;
        writeln!(f, "Presets: {}\n", self.data.presets.join(", "))?;

        writeln!(
            f,
            "  {:<3} {:<24} {:<28} {:<12} {}",
            "", "ID", "LABEL", "CATEGORY", "FLAGS"
        )?;
        for col in &self.data.columns {
            let mut flags = Vec::new();
            if col.locked {
                flags.push("locked");
            }
            if col.sticky {
                flags.push("sticky");
            }
            writeln!(
                f,
                "  {:<3} {:<24} {:<28} {:<12} {}",
                check(col.visible),
                col.id,
                col.label,
                col.category,
                flags.join(",")
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ColumnListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact | ViewMode::Standard => self.render_compact(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

fn check(visible: bool) -> &'static str {
    if visible { "[x]" } else { "[ ]" }
}
