use crate::args::{OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_metric_catalog, present_metric_chart};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use brandflow_catalog::metric_definition;

pub fn handle_list(
    ctx: &ExecutionContext,
    search: Option<String>,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let state = ctx.analytics()?;
    let result = present_metric_catalog(state.metrics(), search.as_deref());

    let renderer = ConsoleRenderer::new(format.into(), view_mode.resolve());
    renderer.render(result)?;
    Ok(())
}

pub fn handle_chart(
    ctx: &ExecutionContext,
    select: Vec<String>,
    hide: Vec<String>,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let mut state = ctx.analytics()?;
    let mode = state.mode();

    for id in select.iter().chain(hide.iter()) {
        if metric_definition(mode, id).is_none() {
            anyhow::bail!("Unknown metric '{}' in {} mode", id, mode);
        }
    }

    for id in &select {
        state.metrics_mut().toggle_selection(id);
    }
    for id in &hide {
        state.metrics_mut().toggle_chart_visibility(id);
    }

    let result = present_metric_chart(&state);
    let renderer = ConsoleRenderer::new(format.into(), view_mode.resolve());
    renderer.render(result)?;
    Ok(())
}
