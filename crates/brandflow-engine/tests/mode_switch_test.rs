use brandflow_catalog::ModeRegistry;
use brandflow_engine::{AnalyticsState, EditorState, MetricSelection, TagStore, pseudo_comparison};
use brandflow_types::{AccountMode, AppliedFilter, FilterValue, NumberOperator};

fn seller_state_with_everything() -> AnalyticsState {
    let mut state = AnalyticsState::new(AccountMode::Seller);
    {
        let filters = state.filters_mut();
        filters.select_filter("fulfillmentChannel");
        filters.toggle_option("FBA");
        filters.apply();
        filters.select_filter("buyBoxPercent");
        filters.set_value1("90");
        filters.apply();
        filters.select_filter("tagList");
        filters.toggle_option("Best Seller");
        filters.apply();
    }
    state.metrics_mut().toggle_selection("organic-sales");
    state.metrics_mut().toggle_selection("profit");
    state
}

#[test]
fn test_seller_to_vendor_prunes_to_vendor_registry() {
    let mut state = seller_state_with_everything();
    state.set_mode(AccountMode::Vendor);

    let vendor = ModeRegistry::for_mode(AccountMode::Vendor);
    for filter in state.filters().applied() {
        assert!(vendor.has_filter(&filter.key), "stale filter {}", filter.key);
    }
    for id in state.columns().visible_ids() {
        assert!(vendor.has_column(id), "stale column {}", id);
    }
    for id in state.metrics().selected_ids() {
        assert!(vendor.has_metric(id), "stale metric {}", id);
    }

    assert!(state.filters().get("tagList").is_some());
    assert!(state.filters().get("fulfillmentChannel").is_none());
    assert!(state.filters().get("buyBoxPercent").is_none());
}

#[test]
fn test_mode_switch_closes_editor_for_vanished_key() {
    let mut state = AnalyticsState::new(AccountMode::Vendor);
    state.filters_mut().select_filter("poStatus");
    state.set_mode(AccountMode::Seller);
    assert_eq!(state.filters().editor(), &EditorState::Closed);
    assert!(state.filters().draft().is_none());
}

#[test]
fn test_mode_switch_keeps_editor_for_shared_key() {
    let mut state = AnalyticsState::new(AccountMode::Seller);
    state.filters_mut().select_filter("price");
    state.set_mode(AccountMode::Both);
    assert!(state.filters().is_open());
}

#[test]
fn test_chart_visible_stays_inside_selection() {
    let mut sel = MetricSelection::new(AccountMode::Seller);
    let steps = [
        "clicks",
        "acos",
        "roas",
        "clicks",
        "impressions",
        "not-a-metric",
    ];
    for (i, id) in steps.iter().enumerate() {
        if i % 2 == 0 {
            sel.toggle_selection(id);
        } else {
            sel.toggle_chart_visibility(id);
        }
        for visible in sel.chart_visible_ids() {
            assert!(sel.is_selected(visible));
        }
    }
    sel.set_mode(AccountMode::Both);
    for visible in sel.chart_visible_ids() {
        assert!(sel.is_selected(visible));
    }
}

#[test]
fn test_tag_creation_is_case_insensitive() {
    let mut store = TagStore::default();
    let count = store.tags().len();
    assert_eq!(store.create("best seller", None).as_deref(), Some("Best Seller"));
    assert_eq!(store.tags().len(), count);
}

#[test]
fn test_pseudo_comparison_is_pure() {
    let first = pseudo_comparison(3, "adSpend", "$1,234.50");
    for _ in 0..10 {
        assert_eq!(pseudo_comparison(3, "adSpend", "$1,234.50"), first);
    }
    assert!(first.change_percent >= 2.0 && first.change_percent < 15.0);
    assert!(first.previous_display.starts_with('$'));
}

#[test]
fn test_none_mode_empties_everything_without_error() {
    let mut state = AnalyticsState::new(AccountMode::Both);
    state.filters_mut().select_filter("price");
    state.set_mode(AccountMode::None);

    assert!(state.filters().applied().is_empty());
    assert!(state.metrics().selected_ids().is_empty());
    assert!(state.columns().visible_ids().is_empty());
    assert!(!state.filters().is_open());
}

#[test]
fn test_with_applied_drops_unknown_keys() {
    let bar = brandflow_engine::FilterBar::with_applied(
        AccountMode::Vendor,
        vec![
            AppliedFilter::new(
                "buyBoxPercent",
                FilterValue::number(NumberOperator::Equals, "1", ""),
            ),
            AppliedFilter::new("productName", FilterValue::text("Siena")),
        ],
    );
    assert_eq!(bar.applied().len(), 1);
    assert_eq!(bar.applied()[0].key, "productName");
}
