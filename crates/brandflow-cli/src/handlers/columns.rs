use crate::args::{OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_column_list;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result};
use brandflow_catalog::column;

pub fn handle_list(
    ctx: &ExecutionContext,
    preset: Option<String>,
    toggle: Vec<String>,
    clear: bool,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let mut state = ctx.analytics()?;
    let columns = state.columns_mut();

    if let Some(name) = &preset {
        columns.apply_preset(name)?;
    }
    if clear {
        columns.clear_all();
    }
    for id in &toggle {
        column(id).with_context(|| format!("Unknown column '{}'", id))?;
        columns.toggle(id);
    }

    let result = present_column_list(state.columns());
    let renderer = ConsoleRenderer::new(format.into(), view_mode.resolve());
    renderer.render(result)?;
    Ok(())
}
