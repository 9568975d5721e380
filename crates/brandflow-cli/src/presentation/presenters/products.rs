use brandflow_catalog::DEFAULT_TAG_COLOR;
use brandflow_engine::{
    AnalyticsState, SortDirection, score_band, score_for, score_label, score_title,
};
use std::path::Path;

use crate::args::hints::fmt;
use crate::presentation::view_models::{
    CellViewModel, CommandResultViewModel, ExportResultViewModel, Guidance, ProductRowViewModel,
    ProductTableViewModel, StatusBadge, TagBadgeViewModel,
};

/// Visible columns of every product, as the table shows them
pub fn build_product_table(
    state: &AnalyticsState,
    sort: Option<(&str, SortDirection)>,
) -> ProductTableViewModel {
    let table = state.table();
    let scope = table.scope();
    let columns = state.columns().visible_columns();

    let headers = columns
        .iter()
        .map(|col| match col.id {
            "productScore" => score_label(scope).to_string(),
            _ => col.label.to_string(),
        })
        .collect();

    let rows = table
        .rows(&columns, state.mode())
        .into_iter()
        .map(|row| {
            let score = table
                .product(row.product_id)
                .map(|p| score_for(p, scope))
                .unwrap_or_default();
            ProductRowViewModel {
                id: row.product_id,
                selected: row.selected,
                score,
                score_color: score_band(score).color().to_string(),
                tags: row
                    .tags
                    .iter()
                    .map(|name| TagBadgeViewModel {
                        name: name.clone(),
                        color: table
                            .tag_store()
                            .color_of(name)
                            .unwrap_or(DEFAULT_TAG_COLOR)
                            .to_string(),
                    })
                    .collect(),
                cells: row
                    .cells
                    .into_iter()
                    .map(|cell| CellViewModel {
                        column_id: cell.column_id.to_string(),
                        previous: cell.comparison.as_ref().map(|c| c.previous_display.clone()),
                        change: cell.comparison.as_ref().map(|c| c.change_display()),
                        is_positive: cell.comparison.as_ref().map(|c| c.is_positive),
                        seller: cell.breakdown.as_ref().map(|b| b.seller.clone()),
                        vendor: cell.breakdown.as_ref().map(|b| b.vendor.clone()),
                        display: cell.display,
                    })
                    .collect(),
            }
        })
        .collect();

    ProductTableViewModel {
        mode: state.mode().label().to_string(),
        score_label: score_label(scope).to_string(),
        score_title: score_title(scope).to_string(),
        preset: state.columns().active_preset().map(str::to_string),
        sort: sort.map(|(column, direction)| {
            let dir = match direction {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            };
            format!("{} {}", column, dir)
        }),
        headers,
        rows,
        selected_count: table.selected_ids().len(),
    }
}

pub fn present_product_table(
    table: ProductTableViewModel,
) -> CommandResultViewModel<ProductTableViewModel> {
    let row_count = table.rows.len();
    let column_count = table.headers.len();
    let preset = table.preset.clone();

    let mut result = CommandResultViewModel::new(table);

    if row_count == 0 {
        return result.with_badge(StatusBadge::info("No products"));
    }

    result = result.with_badge(StatusBadge::success(format!(
        "{} product(s), {} column(s)",
        row_count, column_count
    )));

    if preset.is_none() {
        result = result.with_suggestion(
            Guidance::new("Focus on advertising columns")
                .with_command(fmt::products_preset("Advertising")),
        );
    }

    result
}

pub fn present_export_result(
    path: &Path,
    rows: usize,
    columns: usize,
) -> CommandResultViewModel<ExportResultViewModel> {
    CommandResultViewModel::new(ExportResultViewModel {
        path: path.display().to_string(),
        rows,
        columns,
    })
    .with_badge(StatusBadge::success("Export complete"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::{AccountMode, StoreScope};

    #[test]
    fn test_score_header_follows_store_scope() {
        let mut state = AnalyticsState::new(AccountMode::Seller);
        state.set_store_scope(StoreScope::Amazon);

        let table = build_product_table(&state, None);
        assert_eq!(table.headers[0], "Product");
        assert_eq!(table.headers[1], "APS");
        assert_eq!(table.score_title, "Amazon Performance Score");
    }

    #[test]
    fn test_breakdown_only_in_both_mode() {
        let state = AnalyticsState::new(AccountMode::Seller);
        let table = build_product_table(&state, None);
        assert!(
            table
                .rows
                .iter()
                .flat_map(|r| &r.cells)
                .all(|c| c.seller.is_none() && c.vendor.is_none())
        );
    }

    #[test]
    fn test_numeric_cells_carry_comparison() {
        let state = AnalyticsState::new(AccountMode::Seller);
        let table = build_product_table(&state, Some(("sales", SortDirection::Desc)));
        assert_eq!(table.sort.as_deref(), Some("sales desc"));

        let sales = table.rows[0]
            .cells
            .iter()
            .find(|c| c.column_id == "sales")
            .unwrap();
        assert!(sales.change.is_some());
        assert!(sales.previous.is_some());
    }
}
