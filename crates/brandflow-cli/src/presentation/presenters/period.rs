use brandflow_engine::{PeriodPreset, PeriodSelection};
use chrono::NaiveDate;

use crate::presentation::view_models::{
    CommandResultViewModel, PeriodPresetViewModel, PeriodViewModel, StatusBadge,
};

pub fn present_period(
    selection: &PeriodSelection,
    today: NaiveDate,
) -> CommandResultViewModel<PeriodViewModel> {
    let range = selection.range(today);
    let active = selection.preset();

    let presets = PeriodPreset::ALL
        .iter()
        .map(|preset| PeriodPresetViewModel {
            name: preset_name(*preset),
            label: preset.label().to_string(),
            range: preset.resolve(today).label(),
            active: active == Some(*preset),
        })
        .collect();

    let content = PeriodViewModel {
        label: selection.label(),
        from: range.from.format("%Y-%m-%d").to_string(),
        to: range.to.format("%Y-%m-%d").to_string(),
        range: range.label(),
        days: range.days(),
        custom: selection.custom().is_some(),
        presets,
    };

    let badge = StatusBadge::success(format!("{} ({} days)", content.label, content.days));
    CommandResultViewModel::new(content).with_badge(badge)
}

/// Kebab form accepted by `--preset`, e.g. "last-7-days"
fn preset_name(preset: PeriodPreset) -> String {
    preset.label().to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_default_period_is_marked_active() {
        let result = present_period(&PeriodSelection::default(), today());
        let active: Vec<_> = result.content.presets.iter().filter(|p| p.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Last 30 days");
        assert_eq!(active[0].name, "last-30-days");
        assert!(!result.content.custom);
    }

    #[test]
    fn test_custom_range_has_no_active_preset() {
        let mut selection = PeriodSelection::default();
        selection.set_custom_from(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        selection.set_custom_to(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        assert!(selection.apply_custom());

        let result = present_period(&selection, today());
        assert!(result.content.custom);
        assert!(result.content.presets.iter().all(|p| !p.active));
        assert_eq!(result.content.from, "2025-06-01");
    }
}
