use brandflow_types::{
    AccountMode, AppliedFilter, DateOperator, FilterDefinition, FilterSection, FilterValue,
};

const SELLER_SIDE: &[AccountMode] = &[AccountMode::Seller, AccountMode::Both];
const VENDOR_SIDE: &[AccountMode] = &[AccountMode::Vendor, AccountMode::Both];

const FILTER_DEFINITIONS: &[FilterDefinition] = &[
    FilterDefinition::multi(
        "tagList",
        FilterSection::ProductInfo,
        "Tag List",
        &["Best Seller", "High Rated", "Discounted", "New Arrival"],
    ),
    FilterDefinition::multi(
        "status",
        FilterSection::ProductInfo,
        "Status",
        &["Active", "Inactive", "Paused"],
    ),
    FilterDefinition::text("productName", FilterSection::ProductInfo, "Product Name"),
    FilterDefinition::multi(
        "fulfillmentChannel",
        FilterSection::ProductInfo,
        "Fulfillment Channel",
        &["FBA", "FBM"],
    )
    .only_in(SELLER_SIDE),
    FilterDefinition::number("price", FilterSection::SalesRevenue, "Price")
        .with_input_hint("amount")
        .with_currency("$"),
    FilterDefinition::number("sales", FilterSection::SalesRevenue, "Order").with_input_hint("value"),
    FilterDefinition::number("buyBoxPercent", FilterSection::SalesRevenue, "Buy Box %")
        .with_input_hint("percent")
        .only_in(SELLER_SIDE),
    FilterDefinition::number("shippedRevenue", FilterSection::SalesRevenue, "Shipped Revenue")
        .with_input_hint("amount")
        .only_in(VENDOR_SIDE),
    FilterDefinition::date("trialEndTime", FilterSection::OrdersUnits, "Trial End Time"),
    FilterDefinition::multi(
        "activePackageTypes",
        FilterSection::OrdersUnits,
        "Active Package Types",
        &[
            "3PL WMS",
            "3PL and Returns Management",
            "Agency Old",
            "Amazon - Advertising Managed",
            "Amazon - DSP",
            "Amazon - Full Service",
        ],
    ),
    FilterDefinition::multi(
        "poStatus",
        FilterSection::VendorOperations,
        "PO Status",
        &["Open", "Confirmed", "Shipped", "Closed"],
    )
    .only_in(VENDOR_SIDE),
];

/// Every filter definition regardless of account mode
pub fn all_filter_definitions() -> &'static [FilterDefinition] {
    FILTER_DEFINITIONS
}

/// Filters exposed in the given mode, in catalog order
pub fn filter_definitions(mode: AccountMode) -> Vec<&'static FilterDefinition> {
    FILTER_DEFINITIONS
        .iter()
        .filter(|def| def.is_available_in(mode))
        .collect()
}

pub fn filter_definition(mode: AccountMode, key: &str) -> Option<&'static FilterDefinition> {
    FILTER_DEFINITIONS
        .iter()
        .find(|def| def.key == key && def.is_available_in(mode))
}

/// Sections that hold at least one filter in the given mode
pub fn sections(mode: AccountMode) -> Vec<FilterSection> {
    FilterSection::ALL
        .into_iter()
        .filter(|section| {
            FILTER_DEFINITIONS
                .iter()
                .any(|def| def.section == *section && def.is_available_in(mode))
        })
        .collect()
}

/// Filters applied when the dashboard first opens
pub fn default_applied_filters() -> Vec<AppliedFilter> {
    vec![
        AppliedFilter::new(
            "activePackageTypes",
            FilterValue::multi(["3PL WMS", "Agency Old"]),
        ),
        AppliedFilter::new(
            "trialEndTime",
            FilterValue::date(DateOperator::Before, "2025-12-16", ""),
        ),
    ]
}
