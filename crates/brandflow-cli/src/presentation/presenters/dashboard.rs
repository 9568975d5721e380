use brandflow_engine::AnalyticsState;
use chrono::NaiveDate;

use super::filters::{chip_budget, chip_models};
use super::metrics::{chart_series, metric_cards};
use super::products::build_product_table;
use crate::presentation::view_models::{
    ChipBarViewModel, DashboardHeaderViewModel, StatusBarViewModel, StatusLevel,
    TuiScreenViewModel,
};

/// Whole dashboard screen for the current state.
///
/// `chip_row_width` is the width the filter bar gets on screen; `status` is
/// the last message produced by a key press.
pub fn present_screen(
    state: &AnalyticsState,
    today: NaiveDate,
    chip_row_width: u16,
    status: Option<(StatusLevel, String)>,
) -> TuiScreenViewModel {
    let snapshot = state.snapshot(today);

    let header = DashboardHeaderViewModel {
        mode: snapshot.mode.label().to_string(),
        channels: snapshot
            .channels
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", "),
        stores: snapshot.stores.clone(),
        store_count: snapshot.store_count.clone(),
        group_by: snapshot.group_by.label().to_string(),
        period: snapshot.period.clone(),
        range: snapshot.range.label(),
    };

    let chips = chip_models(state.filters());
    let widths: Vec<u16> = chips.iter().map(|c| c.width).collect();
    let layout = state
        .chip_overflow()
        .layout(&widths, chip_budget(chip_row_width));

    let (status_level, message) = status.unwrap_or_else(|| {
        (
            StatusLevel::Info,
            format!("{} filter(s) applied", snapshot.filters.len()),
        )
    });

    TuiScreenViewModel {
        header,
        chips: ChipBarViewModel {
            chips,
            visible: layout.visible,
            hidden: layout.hidden,
            toggle_label: layout.toggle_label.map(str::to_string),
        },
        cards: metric_cards(state),
        chart: chart_series(state),
        table: build_product_table(state, None),
        status_bar: StatusBarViewModel {
            status_level,
            message,
            selected_products: snapshot.selected_products,
            product_count: snapshot.products,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::AccountMode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_screen_reflects_state() {
        let state = AnalyticsState::new(AccountMode::Seller);
        let screen = present_screen(&state, today(), 200, None);

        assert_eq!(screen.header.mode, "Seller");
        assert_eq!(screen.header.period, "Last 30 days");
        assert_eq!(screen.cards.len(), 4);
        assert_eq!(screen.table.rows.len(), 5);
        assert_eq!(screen.status_bar.message, "2 filter(s) applied");
    }

    #[test]
    fn test_collapsed_chip_row_reports_hidden_chips() {
        let mut state = AnalyticsState::new(AccountMode::Seller);
        state.chip_overflow_mut().toggle();

        let screen = present_screen(&state, today(), 50, None);
        assert!(screen.chips.hidden > 0);
        assert_eq!(screen.chips.toggle_label.as_deref(), Some("Show all"));
    }
}
