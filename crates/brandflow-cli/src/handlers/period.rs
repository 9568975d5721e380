use crate::args::OutputFormat;
use crate::context::{ExecutionContext, parse_date, resolve_today};
use crate::presentation::presenters::present_period;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::{Result, bail};
use brandflow_engine::PeriodPreset;

pub fn handle(
    ctx: &ExecutionContext,
    preset: Option<String>,
    from: Option<String>,
    to: Option<String>,
    today: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let today = resolve_today(today.as_deref())?;
    let mut state = ctx.analytics()?;
    let period = state.period_mut();

    match (preset, from, to) {
        (Some(_), Some(_), _) => bail!("--preset cannot be combined with --from/--to"),
        (Some(name), None, _) => {
            let preset: PeriodPreset = name.parse()?;
            period.select(preset);
        }
        (None, Some(from), Some(to)) => {
            period.set_custom_from(parse_date(&from)?);
            period.set_custom_to(parse_date(&to)?);
            period.apply_custom();
        }
        _ => {}
    }

    let result = present_period(state.period(), today);
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::Standard);
    renderer.render(result)?;
    Ok(())
}
