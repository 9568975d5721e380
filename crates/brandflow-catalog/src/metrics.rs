use brandflow_types::{
    AccountMode, ChartBinding, ChartValueType, MetricCategory::*, MetricDefinition, YAxis,
};

const SELLER_METRICS: &[MetricDefinition] = &[
    MetricDefinition::new("revenue", "Revenue", Revenue),
    MetricDefinition::new("sales", "Sales", Revenue),
    MetricDefinition::new("profit", "Profit", Revenue),
    MetricDefinition::new("ad-sales", "Ad Sales", Revenue)
        .with_stats("$28,460", "$25,200", "12.9%", true)
        .with_chart(ChartBinding::line("adSales", YAxis::Right, ChartValueType::Currency)),
    MetricDefinition::new("ad-aov", "Ad AOV", Revenue),
    MetricDefinition::new("organic-sales", "Organic Sales", Revenue)
        .with_stats("$76,350", "$72,550", "5.2%", true)
        .with_chart(ChartBinding::line("organicSales", YAxis::Right, ChartValueType::Currency)),
    MetricDefinition::new("b2b-ordered-product-sales", "B2B Ordered Product Sales", Revenue),
    MetricDefinition::new("aov", "AOV", Revenue),

    MetricDefinition::new("ad-spend", "Ad Spend", Advertising),
    MetricDefinition::new("impressions", "Impressions", Advertising)
        .with_stats("1,245,680", "1,112,000", "12.5%", true)
        .with_chart(ChartBinding::bar("impressions", YAxis::Right, ChartValueType::Number)),
    MetricDefinition::new("clicks", "Clicks", Advertising)
        .with_stats("34,980", "31,250", "11.9%", true)
        .with_chart(ChartBinding::line("clicks", YAxis::Right, ChartValueType::Number)),
    MetricDefinition::new("ad-conversions", "Ad Conversions", Advertising),
    MetricDefinition::new("ad-units", "Ad Units", Advertising),
    MetricDefinition::new("ad-sku-sales", "Ad SKU Sales", Advertising),
    MetricDefinition::new("ad-sales-attributed-sku", "Ad Sales Attributed SKU", Advertising),
    MetricDefinition::new("acos", "ACoS", Advertising)
        .with_stats("18.5%", "22.3%", "17.0%", false)
        .with_chart(ChartBinding::line("acos", YAxis::Left, ChartValueType::Percent)),
    MetricDefinition::new("tacos", "TACoS", Advertising),
    MetricDefinition::new("roas", "ROAS", Advertising)
        .with_stats("3.42", "3.09", "10.7%", true)
        .with_chart(ChartBinding::line("roas", YAxis::Left, ChartValueType::Number)),
    MetricDefinition::new("cpc", "CPC", Advertising),
    MetricDefinition::new("ctr", "CTR", Advertising),
    MetricDefinition::new("cvr", "CVR", Advertising),

    MetricDefinition::new("quantity", "Quantity", Orders),
    MetricDefinition::new("order-count", "Order Count", Orders)
        .with_stats("2,140", "1,780", "20.2%", true)
        .with_chart(ChartBinding::line("order", YAxis::Right, ChartValueType::Number)),
    MetricDefinition::new("organic-units", "Organic Units", Orders),
    MetricDefinition::new("organic-orders", "Organic Orders", Orders),
    MetricDefinition::new("repeat-order-quantity", "Repeat Order Quantity", Orders),
    MetricDefinition::new("repeat-order-customer-count", "Repeat Order Customer Count", Orders),
    MetricDefinition::new("new-to-brand-customer-count", "New to Brand Customer Count", Orders),
    MetricDefinition::new("new-to-brand-order-quantity", "New to Brand Order Quantity", Orders),
    MetricDefinition::new("b2b-total-order-items", "B2B Total Order Items", Orders),
    MetricDefinition::new("b2b-units-ordered", "B2B Units Ordered", Orders),
    MetricDefinition::new("ordered-product-sales-amount", "Ordered Product Sales Amount", Orders),
    MetricDefinition::new("total-order-items", "Total Order Items", Orders),

    MetricDefinition::new("margin", "Margin", Performance),
    MetricDefinition::new("roi", "ROI", Performance),
    MetricDefinition::new("day-of-supply-fba", "Day of Supply (FBA)", Performance),
    MetricDefinition::new("day-of-supply-fbm", "Day of Supply (FBM)", Performance),
    MetricDefinition::new("market-share", "Market Share", Performance),
    MetricDefinition::new("share-of-voice", "Share of Voice", Performance),
    MetricDefinition::new("sales-velocity", "Sales Velocity", Performance),
    MetricDefinition::new("fba-fee", "FBA Fee", Performance),
    MetricDefinition::new("referral-fee", "Referral Fee", Performance),
    MetricDefinition::new("variable-closing-fee", "Variable Closing Fee", Performance),
    MetricDefinition::new("total-fees", "Total Fees", Performance),
    MetricDefinition::new("unit-landing-cost", "Unit Landing Cost", Performance),
    MetricDefinition::new("cogs", "COGS", Performance),
    MetricDefinition::new("total-expense", "Total Expense", Performance),
    MetricDefinition::new("refund-amount", "Refund Amount", Performance),
    MetricDefinition::new("shipping-amount", "Shipping Amount", Performance),
    MetricDefinition::new("fbm-shipping-cost", "FBM Shipping Cost", Performance),
    MetricDefinition::new("shipping-to-fba-cost", "Shipping to FBA Cost", Performance),
    MetricDefinition::new("new-order-rate", "New Order Rate", Performance),
    MetricDefinition::new("new-customer-rate", "New Customer Rate", Performance),
    MetricDefinition::new("repeat-order-rate", "Repeat Order Rate", Performance),
    MetricDefinition::new("repeat-customer-rate", "Repeat Customer Rate", Performance),
    MetricDefinition::new("refund-percent", "Refund %", Performance),
    MetricDefinition::new("asin-purchase-count", "ASIN Purchase Count", Performance),
    MetricDefinition::new("total-purchase-count", "Total Purchase Count", Performance),
    MetricDefinition::new("market-share-cp", "Market Share CP", Performance),
    MetricDefinition::new("share-of-voice-cp", "Share of Voice CP", Performance),
    MetricDefinition::new("buy-box-percent", "Buy Box %", Performance)
        .with_stats("98.2%", "97.1%", "1.1%", true)
        .with_chart(ChartBinding::line("buyBoxPct", YAxis::Left, ChartValueType::Percent)),
    MetricDefinition::new("buy-box-percent-b2b", "Buy Box % B2B", Performance),

    MetricDefinition::new("sessions", "Sessions", Traffic),
    MetricDefinition::new("child-sessions", "Child Sessions", Traffic),
    MetricDefinition::new("asin-impression-count", "ASIN Impression Count", Traffic),
    MetricDefinition::new("total-query-impression-count", "Total Query Impression Count", Traffic),
    MetricDefinition::new("page-views", "Page Views", Traffic),
    MetricDefinition::new("b2b-page-views", "B2B Page Views", Traffic),
    MetricDefinition::new("b2b-sessions", "B2B Sessions", Traffic),
    MetricDefinition::new("browser-sessions", "Browser Sessions", Traffic),
    MetricDefinition::new("browser-sessions-b2b", "Browser Sessions B2B", Traffic),
    MetricDefinition::new("mobile-app-sessions", "Mobile App Sessions", Traffic),
    MetricDefinition::new("mobile-app-sessions-b2b", "Mobile App Sessions B2B", Traffic),
    MetricDefinition::new("browser-page-views", "Browser Page Views", Traffic),
    MetricDefinition::new("browser-page-views-b2b", "Browser Page Views B2B", Traffic),
    MetricDefinition::new("mobile-app-page-views", "Mobile App Page Views", Traffic),
    MetricDefinition::new("mobile-app-page-views-b2b", "Mobile App Page Views B2B", Traffic),
    MetricDefinition::new("browser-session-percent", "Browser Session %", Traffic),
    MetricDefinition::new("browser-session-percent-b2b", "Browser Session % B2B", Traffic),
    MetricDefinition::new("mobile-app-session-percent", "Mobile App Session %", Traffic),
    MetricDefinition::new("mobile-app-session-percent-b2b", "Mobile App Session % B2B", Traffic),
    MetricDefinition::new("browser-page-views-percent", "Browser Page Views %", Traffic),
    MetricDefinition::new("mobile-app-page-views-percent", "Mobile App Page Views %", Traffic),
    MetricDefinition::new("session-percent", "Session %", Traffic),
    MetricDefinition::new("session-percent-b2b", "Session % B2B", Traffic),
    MetricDefinition::new("page-views-percent", "Page Views %", Traffic),
    MetricDefinition::new("units-per-session", "Units Per Session", Traffic),
    MetricDefinition::new("b2b-units-per-session", "B2B Units Per Session", Traffic),

    MetricDefinition::new("inbound-quantity", "Inbound Quantity", Other),
    MetricDefinition::new("fc-transfer", "FC Transfer", Other),
    MetricDefinition::new("available-quantity", "Available Quantity", Other),
    MetricDefinition::new("refund-quantity", "Refund Quantity", Other),
];

const VENDOR_METRICS: &[MetricDefinition] = &[
    MetricDefinition::new("shipped-revenue", "Shipped Revenue", Revenue)
        .with_stats("$88,420", "$81,230", "8.9%", true)
        .with_chart(ChartBinding::line("shippedRevenue", YAxis::Right, ChartValueType::Currency)),
    MetricDefinition::new("sales", "Sales", Revenue)
        .with_stats("$76,350", "$72,550", "5.2%", true)
        .with_chart(ChartBinding::line("sales", YAxis::Right, ChartValueType::Currency)),
    MetricDefinition::new("ad-sales", "Ad Sales", Revenue)
        .with_stats("$28,460", "$25,200", "12.9%", true)
        .with_chart(ChartBinding::line("adSales", YAxis::Right, ChartValueType::Currency)),
    MetricDefinition::new("refund-amount", "Refund Amount", Revenue),
    MetricDefinition::new("open-purchase-order-units", "Open Purchase Order Units", Revenue),
    MetricDefinition::new("po-period-ordered-units", "PO Period Ordered Units", Revenue),
    MetricDefinition::new("po-period-open-units", "PO Period Open Units", Revenue),
    MetricDefinition::new("po-period-closed-units", "PO Period Closed Units", Revenue),

    MetricDefinition::new("ad-spend", "Ad Spend", Advertising),
    MetricDefinition::new("ad-aov", "Ad AOV", Advertising),
    MetricDefinition::new("impressions", "Impressions", Advertising)
        .with_stats("1,245,680", "1,112,000", "12.5%", true)
        .with_chart(ChartBinding::bar("impressions", YAxis::Right, ChartValueType::Number)),
    MetricDefinition::new("clicks", "Clicks", Advertising)
        .with_stats("34,980", "31,250", "11.9%", true)
        .with_chart(ChartBinding::line("clicks", YAxis::Right, ChartValueType::Number)),
    MetricDefinition::new("ad-conversions", "Ad Conversions", Advertising),
    MetricDefinition::new("ad-units", "Ad Units", Advertising),
    MetricDefinition::new("ad-sku-sales", "Ad SKU Sales", Advertising),
    MetricDefinition::new("ad-sales-attributed-sku", "Ad Sales Attributed SKU", Advertising),
    MetricDefinition::new("acos", "ACoS", Advertising)
        .with_stats("18.5%", "22.3%", "17.0%", false)
        .with_chart(ChartBinding::line("acos", YAxis::Left, ChartValueType::Percent)),
    MetricDefinition::new("tacos", "TACoS", Advertising),
    MetricDefinition::new("roas", "ROAS", Advertising)
        .with_stats("3.42", "3.09", "10.7%", true)
        .with_chart(ChartBinding::line("roas", YAxis::Left, ChartValueType::Number)),
    MetricDefinition::new("cpc", "CPC", Advertising),
    MetricDefinition::new("ctr", "CTR", Advertising),
    MetricDefinition::new("cvr", "CVR", Advertising),

    MetricDefinition::new("order-count", "Order Count", Orders)
        .with_stats("2,140", "1,780", "20.2%", true)
        .with_chart(ChartBinding::line("order", YAxis::Right, ChartValueType::Number)),
    MetricDefinition::new("shipped-units", "Shipped Units", Orders)
        .with_chart(ChartBinding::line("shippedUnits", YAxis::Right, ChartValueType::Number)),
    MetricDefinition::new("quantity", "Quantity", Orders),
    MetricDefinition::new("repeat-orders", "Repeat Orders", Orders),
    MetricDefinition::new("repeat-purchase-revenue", "Repeat Purchase Revenue", Orders),

    MetricDefinition::new("sessions", "Sessions", Traffic)
        .with_chart(ChartBinding::line("sessions", YAxis::Right, ChartValueType::Number)),
    MetricDefinition::new("page-views", "Page Views", Traffic)
        .with_chart(ChartBinding::line("pageViews", YAxis::Right, ChartValueType::Number)),

    MetricDefinition::new("vendor-confirmation-rate", "Vendor Confirmation Rate", Performance),
    MetricDefinition::new("avg-vendor-lead-time-days", "Avg Vendor Lead Time (Days)", Performance),
    MetricDefinition::new("procurable-out-of-stock-rate", "Procurable Out of Stock Rate", Performance),

    MetricDefinition::new("sellable-on-hand-inventory", "Sellable On Hand Inventory", Other),
    MetricDefinition::new("unsellable-on-hand-inventory", "Unsellable On Hand Inventory", Other),
    MetricDefinition::new("aged-90-plus-days-units", "Aged 90+ Days Units", Other),
];

const BOTH_METRICS: &[MetricDefinition] = &[
    MetricDefinition::new("sales", "Sales", Revenue)
        .with_stats("$76,350", "$72,550", "5.2%", true)
        .with_chart(ChartBinding::line("sales", YAxis::Right, ChartValueType::Currency)),
    MetricDefinition::new("ad-sales", "Ad Sales", Revenue)
        .with_stats("$28,460", "$25,200", "12.9%", true)
        .with_chart(ChartBinding::line("adSales", YAxis::Right, ChartValueType::Currency)),
    MetricDefinition::new("refund-amount", "Refund Amount", Revenue),

    MetricDefinition::new("ad-spend", "Ad Spend", Advertising),
    MetricDefinition::new("ad-aov", "Ad AOV", Advertising),
    MetricDefinition::new("clicks", "Clicks", Advertising)
        .with_stats("34,980", "31,250", "11.9%", true)
        .with_chart(ChartBinding::line("clicks", YAxis::Right, ChartValueType::Number)),
    MetricDefinition::new("ad-conversions", "Ad Conversions", Advertising),
    MetricDefinition::new("ad-units", "Ad Units", Advertising),
    MetricDefinition::new("ad-sku-sales", "Ad SKU Sales", Advertising),
    MetricDefinition::new("ad-sales-attributed-sku", "Ad Sales Attributed SKU", Advertising),
    MetricDefinition::new("acos", "ACoS", Advertising)
        .with_stats("18.5%", "22.3%", "17.0%", false)
        .with_chart(ChartBinding::line("acos", YAxis::Left, ChartValueType::Percent)),
    MetricDefinition::new("tacos", "TACoS", Advertising),
    MetricDefinition::new("roas", "ROAS", Advertising)
        .with_stats("3.42", "3.09", "10.7%", true)
        .with_chart(ChartBinding::line("roas", YAxis::Left, ChartValueType::Number)),
    MetricDefinition::new("cpc", "CPC", Advertising),
    MetricDefinition::new("ctr", "CTR", Advertising),
    MetricDefinition::new("cvr", "CVR", Advertising),

    MetricDefinition::new("quantity", "Quantity", Orders)
        .with_chart(ChartBinding::line("order", YAxis::Right, ChartValueType::Number)),
    MetricDefinition::new("repeat-order-customer-count", "Repeat Order Customer Count", Orders),

    MetricDefinition::new("page-views", "Page Views", Traffic)
        .with_chart(ChartBinding::line("pageViews", YAxis::Right, ChartValueType::Number)),
];

/// Metric registry for an account mode; empty when no account is connected
pub fn metric_definitions(mode: AccountMode) -> &'static [MetricDefinition] {
    match mode {
        AccountMode::Seller => SELLER_METRICS,
        AccountMode::Vendor => VENDOR_METRICS,
        AccountMode::Both => BOTH_METRICS,
        AccountMode::None => &[],
    }
}

pub fn metric_definition(mode: AccountMode, id: &str) -> Option<&'static MetricDefinition> {
    metric_definitions(mode).iter().find(|m| m.id == id)
}

/// Cards shown when a mode is entered with nothing selected
pub fn default_metric_ids(mode: AccountMode) -> &'static [&'static str] {
    match mode {
        AccountMode::Seller => &["impressions", "organic-sales", "order-count", "acos"],
        AccountMode::Vendor => &["impressions", "shipped-revenue", "order-count", "acos"],
        AccountMode::Both => &["sales", "ad-sales", "quantity", "acos"],
        AccountMode::None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::RenderAs;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_per_mode() {
        for mode in AccountMode::ALL_ACTIVE {
            let defs = metric_definitions(mode);
            let ids: HashSet<_> = defs.iter().map(|m| m.id).collect();
            assert_eq!(ids.len(), defs.len(), "duplicate metric id in {}", mode);
        }
    }

    #[test]
    fn defaults_resolve_in_their_mode() {
        for mode in AccountMode::ALL_ACTIVE {
            for id in default_metric_ids(mode) {
                assert!(metric_definition(mode, id).is_some(), "{} missing in {}", id, mode);
            }
        }
        assert!(default_metric_ids(AccountMode::None).is_empty());
    }

    #[test]
    fn impressions_render_as_bars() {
        let impressions = metric_definition(AccountMode::Seller, "impressions").unwrap();
        assert_eq!(impressions.chart.unwrap().render_as, RenderAs::Bar);
        assert_eq!(impressions.accent_color, "#10b981");
    }

    #[test]
    fn quantity_only_charts_in_combined_mode() {
        let both = metric_definition(AccountMode::Both, "quantity").unwrap();
        assert_eq!(both.chart.unwrap().data_key, "order");
        let seller = metric_definition(AccountMode::Seller, "quantity").unwrap();
        assert!(seller.chart.is_none());
    }

    #[test]
    fn shipped_revenue_is_vendor_only() {
        assert!(metric_definition(AccountMode::Vendor, "shipped-revenue").is_some());
        assert!(metric_definition(AccountMode::Seller, "shipped-revenue").is_none());
        assert!(metric_definition(AccountMode::Both, "shipped-revenue").is_none());
    }
}
