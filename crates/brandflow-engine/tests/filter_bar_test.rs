use brandflow_engine::{ClickTarget, EditorState, FilterBar};
use brandflow_types::{AccountMode, AppliedFilter, FilterValue, NumberOperator};

fn chip_for(bar: &FilterBar, key: &str) -> String {
    bar.chips()
        .into_iter()
        .find(|c| c.key == key)
        .map(|c| c.text)
        .unwrap_or_default()
}

#[test]
fn test_applying_twice_keeps_one_filter_latest_wins() {
    let mut bar = FilterBar::with_applied(AccountMode::Seller, vec![]);

    bar.select_filter("price");
    bar.set_value1("10");
    bar.apply();

    bar.select_filter("price");
    bar.set_operator("less than").unwrap();
    bar.set_value1("99");
    bar.apply();

    let prices: Vec<_> = bar.applied().iter().filter(|f| f.key == "price").collect();
    assert_eq!(prices.len(), 1);
    assert_eq!(
        prices[0].value,
        FilterValue::number(NumberOperator::LessThan, "99", "")
    );
    assert_eq!(bar.editor(), &EditorState::Closed);
}

#[test]
fn test_multi_chip_truncates_after_three() {
    let mut bar = FilterBar::with_applied(AccountMode::Seller, vec![]);
    bar.select_filter("tagList");
    for tag in ["A", "B", "C", "D"] {
        bar.toggle_option(tag);
    }
    bar.apply();

    insta::assert_snapshot!(chip_for(&bar, "tagList"), @"Tag List: A, B, C +1 more");
}

#[test]
fn test_price_between_chip() {
    let bar = FilterBar::with_applied(
        AccountMode::Seller,
        vec![AppliedFilter::new(
            "price",
            FilterValue::number(NumberOperator::Between, "10", "50"),
        )],
    );

    insta::assert_snapshot!(chip_for(&bar, "price"), @"Price between $10 and $50");
}

#[test]
fn test_currency_only_prefixes_price() {
    let mut bar = FilterBar::with_applied(
        AccountMode::Seller,
        vec![
            AppliedFilter::new(
                "price",
                FilterValue::number(NumberOperator::GreaterThanOrEqual, "5", ""),
            ),
            AppliedFilter::new(
                "sales",
                FilterValue::number(NumberOperator::GreaterThanOrEqual, "5", ""),
            ),
        ],
    );
    bar.set_currency("€");

    assert_eq!(chip_for(&bar, "price"), "Price ≥ €5");
    assert_eq!(chip_for(&bar, "sales"), "Order ≥ 5");
}

#[test]
fn test_outside_click_discards_draft() {
    let mut bar = FilterBar::new(AccountMode::Seller);
    let before = bar.applied().to_vec();

    bar.open_add_filter();
    bar.set_filter_search("price");
    bar.select_filter("price");
    bar.set_value1("1000");

    bar.outside_click(ClickTarget::Trigger);
    assert!(bar.is_open());

    bar.outside_click(ClickTarget::Elsewhere);
    assert!(!bar.is_open());
    assert!(bar.draft().is_none());
    assert_eq!(bar.filter_search(), "");
    assert_eq!(bar.applied(), before.as_slice());
}

#[test]
fn test_empty_multi_draft_applies_as_all() {
    let mut bar = FilterBar::with_applied(AccountMode::Seller, vec![]);
    bar.select_filter("status");
    bar.apply();
    assert_eq!(chip_for(&bar, "status"), "Status: All");
}
