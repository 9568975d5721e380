use super::args::{
    Cli, ColumnsCommand, Commands, ConfigCommand, FiltersCommand, MetricsCommand, OutputFormat,
    TagsCommand,
};
use super::handlers;
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use crate::logging;
use crate::presentation::presenters::present_guidance;
use crate::presentation::view_models::GuidanceViewModel;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::Result;
use brandflow_catalog::{filter_definitions, metric_definitions};
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_data_dir(cli.config.as_deref())?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");
    let ctx = ExecutionContext::new(data_dir, cli.mode);
    let format = cli.format;

    let Some(command) = cli.command else {
        return show_guidance(&ctx, format);
    };

    match command {
        Commands::Metrics { command } => match command {
            MetricsCommand::List { search, view_mode } => {
                handlers::metrics::handle_list(&ctx, search, format, &view_mode)
            }
            MetricsCommand::Chart {
                select,
                hide,
                view_mode,
            } => handlers::metrics::handle_chart(&ctx, select, hide, format, &view_mode),
        },

        Commands::Columns { command } => match command {
            ColumnsCommand::List {
                preset,
                toggle,
                clear,
                view_mode,
            } => handlers::columns::handle_list(&ctx, preset, toggle, clear, format, &view_mode),
        },

        Commands::Products {
            preset,
            store,
            sort,
            desc,
            view_mode,
        } => handlers::products::handle(&ctx, preset, store, sort, desc, format, &view_mode),

        Commands::Export { preset, output } => {
            handlers::export::handle(&ctx, preset, output, format)
        }

        Commands::Filters { command } => match command {
            FiltersCommand::Catalog { search, filters } => {
                handlers::filters::handle_catalog(&ctx, search, &filters, format)
            }
            FiltersCommand::Chips {
                filters,
                width,
                collapsed,
                view_mode,
            } => handlers::filters::handle_chips(&ctx, &filters, width, collapsed, format, &view_mode),
            FiltersCommand::Preview {
                key,
                options,
                operator,
                value1,
                value2,
                match_mode,
            } => handlers::filters::handle_preview(
                &ctx, key, options, operator, value1, value2, match_mode, format,
            ),
        },

        Commands::Tags { command } => match command {
            TagsCommand::List { search } => handlers::tags::handle_list(&ctx, search, format),
            TagsCommand::Create { name, color } => {
                handlers::tags::handle_create(&ctx, name, color, format)
            }
            TagsCommand::Rename { old, new, color } => {
                handlers::tags::handle_rename(&ctx, old, new, color, format)
            }
            TagsCommand::Delete { name } => handlers::tags::handle_delete(&ctx, name, format),
            TagsCommand::Toggle { product_id, tag } => {
                handlers::tags::handle_toggle(&ctx, product_id, tag, format)
            }
        },

        Commands::Period {
            preset,
            from,
            to,
            today,
        } => handlers::period::handle(&ctx, preset, from, to, today, format),

        Commands::Dashboard { today } => handlers::dashboard::handle(&ctx, today, format),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle_show(&ctx, format),
            ConfigCommand::Init { force } => handlers::config::handle_init(&ctx, force, format),
        },
    }
}

fn show_guidance(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let mode = ctx.mode()?;
    let state = ctx.analytics()?;

    let content = GuidanceViewModel {
        config_exists: ctx.config_path().exists(),
        mode: mode.label().to_string(),
        filter_count: filter_definitions(mode).len(),
        metric_count: metric_definitions(mode).len(),
        product_count: state.table().products().len(),
    };

    let renderer = ConsoleRenderer::new(format.into(), ViewMode::Standard);
    renderer.render(present_guidance(content))?;
    Ok(())
}
