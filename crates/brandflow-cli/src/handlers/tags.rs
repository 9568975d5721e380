use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::presentation::formatters::color::parse_hex;
use crate::presentation::presenters::{present_tag_create, present_tag_list};
use crate::presentation::{
    CommandResultViewModel, ConsoleRenderer, CreateView, Renderer, StatusBadge, ViewMode,
};
use anyhow::{Context, Result, bail};
use brandflow_engine::ProductTable;
use serde::Serialize;

// Tag edits live in the in-memory table of this invocation; nothing is persisted.

pub fn handle_list(ctx: &ExecutionContext, search: Option<String>, format: OutputFormat) -> Result<()> {
    let state = ctx.analytics()?;
    let result = present_tag_list(state.table(), search.as_deref());
    render(result, format)
}

pub fn handle_create(
    ctx: &ExecutionContext,
    name: String,
    color: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    if let Some(c) = &color {
        validate_color(c)?;
    }

    let mut state = ctx.analytics()?;
    let table = state.table_mut();
    let before = table.tag_store().tags().len();
    let key = table
        .create_tag(&name, color.as_deref())
        .context("Tag name must not be blank")?;
    let created = table.tag_store().tags().len() > before;

    let result = present_tag_create(state.table(), &key, created);
    render(result, format)
}

pub fn handle_rename(
    ctx: &ExecutionContext,
    old: String,
    new: String,
    color: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    if new.trim().is_empty() {
        bail!("Tag name must not be blank");
    }
    if let Some(c) = &color {
        validate_color(c)?;
    }

    let mut state = ctx.analytics()?;
    let table = state.table_mut();
    let current = existing_color(table, &old)?;
    table.update_tag(&old, new.trim(), color.as_deref().unwrap_or(&current));

    let mut result = present_tag_list(state.table(), None);
    result.badge = Some(StatusBadge::success(format!(
        "Renamed \"{}\" to \"{}\"",
        old,
        new.trim()
    )));
    render(result, format)
}

pub fn handle_delete(ctx: &ExecutionContext, name: String, format: OutputFormat) -> Result<()> {
    let mut state = ctx.analytics()?;
    let table = state.table_mut();
    existing_color(table, &name)?;
    table.delete_tag(&name);

    let mut result = present_tag_list(state.table(), None);
    result.badge = Some(StatusBadge::success(format!("Deleted \"{}\"", name)));
    render(result, format)
}

pub fn handle_toggle(
    ctx: &ExecutionContext,
    product_id: u32,
    tag: String,
    format: OutputFormat,
) -> Result<()> {
    let mut state = ctx.analytics()?;
    let table = state.table_mut();
    if table.product(product_id).is_none() {
        bail!("Unknown product {}", product_id);
    }
    if !table.toggle_tag(product_id, &tag) {
        bail!("Tag name must not be blank");
    }

    let tagged = table
        .product(product_id)
        .is_some_and(|p| p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag.trim())));
    let label = if tagged {
        format!("Tagged product {} with \"{}\"", product_id, tag.trim())
    } else {
        format!("Removed \"{}\" from product {}", tag.trim(), product_id)
    };

    let mut result = present_tag_list(state.table(), None);
    result.badge = Some(StatusBadge::success(label));
    render(result, format)
}

fn existing_color(table: &ProductTable, name: &str) -> Result<String> {
    table
        .tag_store()
        .color_of(name)
        .map(str::to_string)
        .with_context(|| format!("Unknown tag '{}'", name))
}

fn validate_color(color: &str) -> Result<()> {
    if parse_hex(color).is_none() {
        bail!("Invalid colour '{}', expected #rrggbb", color);
    }
    Ok(())
}

fn render<T>(result: CommandResultViewModel<T>, format: OutputFormat) -> Result<()>
where
    T: Serialize + CreateView,
{
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    renderer.render(result)
}
