use crate::args::{OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters::{build_product_table, present_product_table};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result};
use brandflow_catalog::column;
use brandflow_engine::{AnalyticsState, SortDirection};
use brandflow_types::StoreScope;

pub fn handle(
    ctx: &ExecutionContext,
    preset: Option<String>,
    store: Option<StoreScope>,
    sort: Option<String>,
    desc: bool,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let mut state = ctx.analytics()?;
    configure_table(&mut state, preset.as_deref(), store)?;

    let direction = if desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    if let Some(column_id) = &sort {
        column(column_id).with_context(|| format!("Unknown column '{}'", column_id))?;
        state.table_mut().sort_by(column_id, direction);
    }

    let table = build_product_table(&state, sort.as_deref().map(|c| (c, direction)));
    let result = present_product_table(table);

    let renderer = ConsoleRenderer::new(format.into(), view_mode.resolve());
    renderer.render(result)?;
    Ok(())
}

/// Apply the per-invocation column preset and score scope
pub(crate) fn configure_table(
    state: &mut AnalyticsState,
    preset: Option<&str>,
    store: Option<StoreScope>,
) -> Result<()> {
    if let Some(name) = preset {
        state.columns_mut().apply_preset(name)?;
    }
    if let Some(scope) = store {
        state.set_store_scope(scope);
    }
    Ok(())
}
