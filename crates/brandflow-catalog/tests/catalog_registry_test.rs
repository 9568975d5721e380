use brandflow_catalog::{
    ModeRegistry, default_metric_ids, filter_definitions, metric_definitions, sections,
};
use brandflow_types::{AccountMode, FilterType};

fn section_labels(mode: AccountMode) -> String {
    sections(mode)
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[test]
fn test_section_headings_per_mode() {
    insta::assert_snapshot!(section_labels(AccountMode::Seller), @"PRODUCT INFO, SALES & REVENUE, ORDERS & UNITS");
    insta::assert_snapshot!(section_labels(AccountMode::Vendor), @"PRODUCT INFO, SALES & REVENUE, ORDERS & UNITS, VENDOR OPERATIONS");
    assert_eq!(section_labels(AccountMode::None), "");
}

#[test]
fn test_seller_catalog_keys() {
    let keys: Vec<_> = filter_definitions(AccountMode::Seller)
        .iter()
        .map(|d| d.key)
        .collect();
    insta::assert_snapshot!(keys.join(" "), @"tagList status productName fulfillmentChannel price sales buyBoxPercent trialEndTime activePackageTypes");
}

#[test]
fn test_only_price_carries_currency() {
    for mode in AccountMode::ALL_ACTIVE {
        for def in filter_definitions(mode) {
            if def.currency_symbol.is_some() {
                assert_eq!(def.key, "price");
                assert_eq!(def.filter_type, FilterType::Number);
            }
        }
    }
}

#[test]
fn test_combined_mode_is_narrower_than_seller_for_metrics() {
    assert!(metric_definitions(AccountMode::Both).len() < metric_definitions(AccountMode::Seller).len());
    let both = ModeRegistry::for_mode(AccountMode::Both);
    for id in default_metric_ids(AccountMode::Both) {
        assert!(both.has_metric(id));
    }
}
