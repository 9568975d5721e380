use crate::args::OutputFormat;
use crate::context::{ExecutionContext, resolve_today};
use crate::presentation::renderers::DashboardApp;
use anyhow::Result;
use is_terminal::IsTerminal;
use tracing::info;

/// Interactive dashboard on a terminal; a JSON snapshot otherwise
pub fn handle(ctx: &ExecutionContext, today: Option<String>, format: OutputFormat) -> Result<()> {
    let today = resolve_today(today.as_deref())?;
    let state = ctx.analytics()?;

    if format == OutputFormat::Json || !std::io::stdout().is_terminal() {
        println!("{}", serde_json::to_string_pretty(&state.snapshot(today))?);
        return Ok(());
    }

    info!(mode = %state.mode(), "starting dashboard");
    DashboardApp::new(state, today).run()
}
