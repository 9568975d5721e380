use brandflow_engine::{ChipOverflow, FilterBar, RowBudget, chip_text, tag_color_class};
use brandflow_types::{AppliedFilter, Draft, FilterDefinition};

use crate::args::format_filter_spec;
use crate::args::hints::cmd;
use crate::presentation::formatters::text::display_width;
use crate::presentation::view_models::{
    CatalogEntryViewModel, CatalogSectionViewModel, ChipViewModel, CommandResultViewModel,
    FilterCatalogViewModel, FilterChipsViewModel, FilterPreviewViewModel, Guidance,
    OptionViewModel, StatusBadge,
};

// search box (24) + "[+ Add Filter]" (14) + gap
const LEADING_WIDTH: u16 = 39;
const CHIP_GAP: u16 = 1;
// "[" + " ×]"
const CHIP_CHROME: u16 = 4;

pub fn chip_budget(row_width: u16) -> RowBudget {
    RowBudget {
        row_width,
        leading_width: LEADING_WIDTH,
        gap: CHIP_GAP,
    }
}

pub fn present_filter_catalog(bar: &FilterBar) -> CommandResultViewModel<FilterCatalogViewModel> {
    let sections: Vec<CatalogSectionViewModel> = bar
        .catalog_sections()
        .into_iter()
        .map(|section| CatalogSectionViewModel {
            label: section.label.to_string(),
            entries: section
                .entries
                .into_iter()
                .map(|entry| CatalogEntryViewModel {
                    key: entry.key.to_string(),
                    label: entry.label.to_string(),
                    filter_type: entry.filter_type.to_string(),
                    badge: entry.badge,
                })
                .collect(),
        })
        .collect();

    let search = (!bar.filter_search().is_empty()).then(|| bar.filter_search().to_string());
    let entry_count: usize = sections.iter().map(|s| s.entries.len()).sum();
    let applied = bar.applied().len();

    let content = FilterCatalogViewModel {
        mode: bar.mode().label().to_string(),
        search,
        sections,
    };

    let mut result = CommandResultViewModel::new(content);
    if entry_count == 0 {
        result = result.with_badge(StatusBadge::info("No filters found"));
    } else {
        result = result.with_badge(StatusBadge::success(format!(
            "{} filter(s), {} applied",
            entry_count, applied
        )));
    }
    if applied > 0 {
        result = result.with_suggestion(
            Guidance::new("See the applied filters as chips").with_command(cmd::FILTERS_CHIPS),
        );
    }
    result
}

pub(crate) fn chip_models(bar: &FilterBar) -> Vec<ChipViewModel> {
    bar.chips()
        .into_iter()
        .map(|chip| ChipViewModel {
            width: display_width(&chip.text).saturating_add(CHIP_CHROME),
            key: chip.key,
            text: chip.text,
        })
        .collect()
}

pub fn present_filter_chips(
    bar: &FilterBar,
    overflow: &ChipOverflow,
    row_width: u16,
) -> CommandResultViewModel<FilterChipsViewModel> {
    let chips = chip_models(bar);
    let widths: Vec<u16> = chips.iter().map(|c| c.width).collect();
    let layout = overflow.layout(&widths, chip_budget(row_width));

    let content = FilterChipsViewModel {
        mode: bar.mode().label().to_string(),
        chips,
        visible: layout.visible,
        hidden: layout.hidden,
        toggle_label: layout.toggle_label.map(str::to_string),
        row_width,
    };

    let mut result = CommandResultViewModel::new(content);
    if bar.applied().is_empty() {
        result = result
            .with_badge(StatusBadge::info("No filters applied"))
            .with_suggestion(
                Guidance::new("Browse the filter catalog").with_command(cmd::FILTERS_CATALOG),
            );
    } else if layout.hidden > 0 {
        result = result.with_badge(StatusBadge::info(format!(
            "{} filter(s) hidden",
            layout.hidden
        )));
    }
    result
}

pub fn present_filter_preview(
    bar: &FilterBar,
    draft: &Draft,
    def: &FilterDefinition,
) -> CommandResultViewModel<FilterPreviewViewModel> {
    let selected = draft.value.selected();
    let is_tag_list = draft.key == "tagList";
    let options = bar
        .visible_options()
        .into_iter()
        .map(|option| OptionViewModel {
            value: option.to_string(),
            selected: selected.iter().any(|s| s == option),
            color: is_tag_list.then(|| tag_color_class(option).hex().to_string()),
        })
        .collect();

    let chip = chip_text(&AppliedFilter::from(draft.clone()), Some(def), bar.currency());

    let content = FilterPreviewViewModel {
        key: draft.key.clone(),
        label: def.label.to_string(),
        filter_type: def.filter_type.to_string(),
        chip,
        options,
        operators: def.operators().into_iter().map(str::to_string).collect(),
        input_hint: def.input_hint.map(str::to_string),
        match_preview: bar.match_preview(),
    };

    let apply = format!(
        "{} --filter '{}'",
        cmd::FILTERS_CHIPS,
        format_filter_spec(&draft.key, &draft.value)
    );
    CommandResultViewModel::new(content)
        .with_suggestion(Guidance::new("Apply this draft").with_command(apply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::AccountMode;

    #[test]
    fn test_chip_width_includes_chrome() {
        let bar = FilterBar::new(AccountMode::Seller);
        for chip in chip_models(&bar) {
            assert_eq!(chip.width, display_width(&chip.text) + CHIP_CHROME);
        }
    }

    #[test]
    fn test_narrow_row_hides_chips_when_collapsed() {
        let bar = FilterBar::new(AccountMode::Seller);
        let overflow = ChipOverflow { expanded: false };
        let result = present_filter_chips(&bar, &overflow, LEADING_WIDTH);

        assert_eq!(result.content.visible, 0);
        assert_eq!(result.content.hidden, bar.applied().len());
        assert_eq!(result.content.toggle_label.as_deref(), Some("Show all"));
    }

    #[test]
    fn test_wide_row_shows_everything() {
        let bar = FilterBar::new(AccountMode::Seller);
        let result = present_filter_chips(&bar, &ChipOverflow::default(), u16::MAX);
        assert_eq!(result.content.hidden, 0);
        assert!(result.content.toggle_label.is_none());
    }
}
