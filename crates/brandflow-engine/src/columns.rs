use brandflow_catalog::{LOCKED_COLUMNS, columns_for, is_locked, preset};
use brandflow_types::{AccountMode, ColumnDef, Result};
use std::collections::BTreeSet;
use tracing::debug;

/// Visible product table columns for the current mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    mode: AccountMode,
    visible: BTreeSet<String>,
    active_preset: Option<&'static str>,
}

impl ColumnSelection {
    pub fn new(mode: AccountMode) -> Self {
        let mut selection = Self {
            mode,
            visible: BTreeSet::new(),
            active_preset: None,
        };
        selection.select_all();
        selection
    }

    pub fn mode(&self) -> AccountMode {
        self.mode
    }

    pub fn active_preset(&self) -> Option<&'static str> {
        self.active_preset
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    pub fn visible_ids(&self) -> &BTreeSet<String> {
        &self.visible
    }

    /// Any mode change shows every column of the new mode
    pub fn set_mode(&mut self, mode: AccountMode) {
        self.mode = mode;
        self.select_all();
        debug!(%mode, visible = self.visible.len(), "columns reset for mode");
    }

    /// Show exactly the preset category's columns available in this mode,
    /// plus the locked columns.
    pub fn apply_preset(&mut self, name: &str) -> Result<()> {
        let preset = preset(name)?;
        self.visible = columns_for(self.mode)
            .into_iter()
            .filter(|c| c.category == preset.category || is_locked(c.id))
            .map(|c| c.id.to_string())
            .collect();
        self.active_preset = Some(preset.name);
        debug!(preset = preset.name, "column preset applied");
        Ok(())
    }

    /// Flip one column. Locked and unavailable ids are left alone; any
    /// accepted toggle clears the active preset.
    pub fn toggle(&mut self, id: &str) {
        if is_locked(id) || !self.is_available(id) {
            return;
        }
        if !self.visible.remove(id) {
            self.visible.insert(id.to_string());
        }
        self.active_preset = None;
    }

    pub fn select_all(&mut self) {
        self.visible = columns_for(self.mode)
            .into_iter()
            .map(|c| c.id.to_string())
            .collect();
        self.active_preset = None;
    }

    /// Hide everything except the locked columns. In `none` mode no column is
    /// available, so the set ends up empty.
    pub fn clear_all(&mut self) {
        self.visible = LOCKED_COLUMNS
            .iter()
            .filter(|id| self.is_available(id))
            .map(|id| id.to_string())
            .collect();
        self.active_preset = None;
    }

    /// Visible columns in registry order with sticky columns first
    pub fn visible_columns(&self) -> Vec<&'static ColumnDef> {
        let (mut sticky, rest): (Vec<_>, Vec<_>) = columns_for(self.mode)
            .into_iter()
            .filter(|c| self.visible.contains(c.id))
            .partition(|c| c.sticky);
        sticky.extend(rest);
        sticky
    }

    fn is_available(&self, id: &str) -> bool {
        columns_for(self.mode).iter().any(|c| c.id == id)
    }
}
