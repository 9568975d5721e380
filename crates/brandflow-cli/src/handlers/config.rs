use crate::args::OutputFormat;
use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_config, present_config_init};
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::{Result, bail};
use tracing::info;

pub fn handle_show(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let config = ctx.config()?;
    let result = present_config(config, &ctx.config_path());

    let renderer = ConsoleRenderer::new(format.into(), ViewMode::Standard);
    renderer.render(result)?;
    Ok(())
}

pub fn handle_init(ctx: &ExecutionContext, force: bool, format: OutputFormat) -> Result<()> {
    let path = ctx.config_path();
    let existed = path.exists();
    if existed && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    info!(path = %path.display(), "config written");

    let result = present_config_init(&path, existed);
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::Standard);
    renderer.render(result)?;
    Ok(())
}
