use brandflow_types::{AccountMode, Align, ColumnCategory, ColumnDef, ColumnPreset, Error, Result};

const ALL: &[AccountMode] = &AccountMode::ALL_ACTIVE;
const SELLER: &[AccountMode] = &[AccountMode::Seller];
const VENDOR: &[AccountMode] = &[AccountMode::Vendor];
const SELLER_SIDE: &[AccountMode] = &[AccountMode::Seller, AccountMode::Both];
const VENDOR_SIDE: &[AccountMode] = &[AccountMode::Vendor, AccountMode::Both];

/// Columns that every view keeps, even after "Clear All"
pub const LOCKED_COLUMNS: &[&str] = &["product", "productScore"];

const COLUMN_DEFINITIONS: &[ColumnDef] = &[
    ColumnDef::metric("product", "Product", ColumnCategory::Product, ALL)
        .aligned(Align::Left)
        .sticky(48),
    ColumnDef::metric("productScore", "Product Score", ColumnCategory::Score, ALL)
        .aligned(Align::Center),
    // Revenue
    ColumnDef::metric("price", "Price", ColumnCategory::Revenue, ALL),
    ColumnDef::metric("sales", "Sales", ColumnCategory::Revenue, ALL),
    ColumnDef::metric("profit", "Profit", ColumnCategory::Revenue, SELLER_SIDE),
    ColumnDef::metric("organicSales", "Organic Sales", ColumnCategory::Revenue, SELLER_SIDE),
    ColumnDef::metric("shippedRevenue", "Shipped Revenue", ColumnCategory::Revenue, VENDOR_SIDE),
    // Advertising
    ColumnDef::metric("adSales", "Ad Sales", ColumnCategory::Advertising, ALL),
    ColumnDef::metric("adSpend", "Ad Spend", ColumnCategory::Advertising, ALL),
    ColumnDef::metric("acos", "ACoS", ColumnCategory::Advertising, ALL),
    ColumnDef::metric("roas", "ROAS", ColumnCategory::Advertising, ALL),
    ColumnDef::metric("impressions", "Impressions", ColumnCategory::Advertising, SELLER_SIDE),
    ColumnDef::metric("clicks", "Clicks", ColumnCategory::Advertising, ALL),
    // Orders
    ColumnDef::metric("orderCount", "Order Count", ColumnCategory::Orders, SELLER_SIDE),
    ColumnDef::metric("units", "Units", ColumnCategory::Orders, ALL),
    ColumnDef::metric("shippedUnits", "Shipped Units", ColumnCategory::Orders, VENDOR_SIDE),
    // Performance
    ColumnDef::metric("productCost", "Product Cost", ColumnCategory::Performance, SELLER),
    ColumnDef::metric("fbaFee", "FBA Fee", ColumnCategory::Performance, SELLER),
    ColumnDef::metric("referralFee", "Referral Fee", ColumnCategory::Performance, SELLER),
    ColumnDef::metric("totalFees", "Total Fees", ColumnCategory::Performance, SELLER_SIDE),
    ColumnDef::metric("buyBoxPercent", "Buy Box %", ColumnCategory::Performance, SELLER_SIDE),
    ColumnDef::metric(
        "vendorConfirmationRate",
        "Vendor Confirmation Rate",
        ColumnCategory::Performance,
        VENDOR_SIDE,
    ),
    // Traffic
    ColumnDef::metric("sessions", "Sessions", ColumnCategory::Traffic, ALL),
    ColumnDef::metric("pageViews", "Page Views", ColumnCategory::Traffic, ALL),
    // Inventory
    ColumnDef::metric("availableQuantity", "Available Quantity", ColumnCategory::Inventory, SELLER),
    ColumnDef::metric(
        "sellableOnHand",
        "Sellable On Hand",
        ColumnCategory::Inventory,
        VENDOR,
    ),
];

const PRESETS: &[ColumnPreset] = &[
    ColumnPreset {
        name: "Revenue",
        category: ColumnCategory::Revenue,
    },
    ColumnPreset {
        name: "Advertising",
        category: ColumnCategory::Advertising,
    },
    ColumnPreset {
        name: "Orders",
        category: ColumnCategory::Orders,
    },
    ColumnPreset {
        name: "Performance",
        category: ColumnCategory::Performance,
    },
    ColumnPreset {
        name: "Traffic",
        category: ColumnCategory::Traffic,
    },
    ColumnPreset {
        name: "Inventory",
        category: ColumnCategory::Inventory,
    },
];

pub fn all_columns() -> &'static [ColumnDef] {
    COLUMN_DEFINITIONS
}

/// Columns available in a mode, in registry order
pub fn columns_for(mode: AccountMode) -> Vec<&'static ColumnDef> {
    COLUMN_DEFINITIONS
        .iter()
        .filter(|col| col.is_available_in(mode))
        .collect()
}

pub fn column(id: &str) -> Option<&'static ColumnDef> {
    COLUMN_DEFINITIONS.iter().find(|col| col.id == id)
}

pub fn is_locked(id: &str) -> bool {
    LOCKED_COLUMNS.contains(&id)
}

pub fn presets() -> &'static [ColumnPreset] {
    PRESETS
}

/// Look up a preset by name, ignoring case
pub fn preset(name: &str) -> Result<&'static ColumnPreset> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| Error::UnknownPreset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_columns_exist_everywhere() {
        for mode in AccountMode::ALL_ACTIVE {
            let ids: Vec<_> = columns_for(mode).iter().map(|c| c.id).collect();
            for locked in LOCKED_COLUMNS {
                assert!(ids.contains(locked), "{} missing in {}", locked, mode);
            }
        }
    }

    #[test]
    fn no_columns_without_account() {
        assert!(columns_for(AccountMode::None).is_empty());
    }

    #[test]
    fn preset_lookup_ignores_case() {
        assert_eq!(preset("advertising").unwrap().category, ColumnCategory::Advertising);
        assert_eq!(preset(" Revenue ").unwrap().name, "Revenue");
        assert_eq!(
            preset("Margins").unwrap_err(),
            Error::UnknownPreset("Margins".to_string())
        );
    }

    #[test]
    fn every_preset_has_columns_in_some_mode() {
        for p in presets() {
            assert!(
                COLUMN_DEFINITIONS.iter().any(|c| c.category == p.category),
                "preset {} is empty",
                p.name
            );
        }
    }
}
