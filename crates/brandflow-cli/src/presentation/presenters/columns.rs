use brandflow_catalog::{columns_for, is_locked, presets};
use brandflow_engine::ColumnSelection;

use crate::args::hints::fmt;
use crate::presentation::view_models::{
    ColumnEntryViewModel, ColumnListViewModel, CommandResultViewModel, Guidance, StatusBadge,
};

pub fn present_column_list(selection: &ColumnSelection) -> CommandResultViewModel<ColumnListViewModel> {
    let columns: Vec<ColumnEntryViewModel> = columns_for(selection.mode())
        .into_iter()
        .map(|col| ColumnEntryViewModel {
            id: col.id.to_string(),
            label: col.label.to_string(),
            category: col.category.label().to_string(),
            visible: selection.is_visible(col.id),
            locked: is_locked(col.id),
            sticky: col.sticky,
        })
        .collect();

    let content = ColumnListViewModel {
        mode: selection.mode().label().to_string(),
        active_preset: selection.active_preset().map(str::to_string),
        presets: presets().iter().map(|p| p.name.to_string()).collect(),
        columns,
    };

    let visible = content.visible_count();
    let total = content.columns.len();
    let badge = match &content.active_preset {
        Some(name) => StatusBadge::success(format!(
            "{}/{} columns visible ({} preset)",
            visible, total, name
        )),
        None => StatusBadge::success(format!("{}/{} columns visible", visible, total)),
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    if selection.active_preset().is_none() {
        result = result.with_suggestion(
            Guidance::new("Show one category only").with_command(fmt::columns_preset("Revenue")),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::AccountMode;

    #[test]
    fn test_preset_is_reported_in_badge() {
        let mut selection = ColumnSelection::new(AccountMode::Seller);
        selection.apply_preset("advertising").unwrap();

        let result = present_column_list(&selection);
        assert!(result.badge.unwrap().label.ends_with("(Advertising preset)"));
        assert!(result.suggestions.is_empty());
        assert_eq!(result.content.active_preset.as_deref(), Some("Advertising"));
    }

    #[test]
    fn test_locked_columns_are_flagged() {
        let selection = ColumnSelection::new(AccountMode::Vendor);
        let result = present_column_list(&selection);
        let product = result
            .content
            .columns
            .iter()
            .find(|c| c.id == "product")
            .unwrap();
        assert!(product.locked);
        assert!(product.visible);
    }
}
