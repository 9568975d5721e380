use crate::args::{FilterArgs, FilterSpec, MatchArg, OutputFormat, SpecValue, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters::{
    present_filter_catalog, present_filter_chips, present_filter_preview,
};
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::{Context, Result, bail};
use brandflow_engine::FilterBar;
use brandflow_types::{FilterDefinition, FilterType};
use tracing::debug;

const FALLBACK_WIDTH: u16 = 120;

pub fn handle_catalog(
    ctx: &ExecutionContext,
    search: Option<String>,
    filters: &FilterArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut bar = filter_bar(ctx, filters)?;
    if let Some(query) = search {
        bar.set_filter_search(query);
    }

    let result = present_filter_catalog(&bar);
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::Standard);
    renderer.render(result)?;
    Ok(())
}

pub fn handle_chips(
    ctx: &ExecutionContext,
    filters: &FilterArgs,
    width: Option<u16>,
    collapsed: bool,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let mut state = ctx.analytics()?;
    let bar = filter_bar(ctx, filters)?;
    *state.filters_mut() = bar;
    if collapsed {
        state.chip_overflow_mut().expanded = false;
    }

    let row_width = width.unwrap_or_else(terminal_width);
    let result = present_filter_chips(state.filters(), state.chip_overflow(), row_width);

    let renderer = ConsoleRenderer::new(format.into(), view_mode.resolve());
    renderer.render(result)?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_preview(
    ctx: &ExecutionContext,
    key: String,
    options: Vec<String>,
    operator: Option<String>,
    value1: Option<String>,
    value2: Option<String>,
    match_mode: MatchArg,
    format: OutputFormat,
) -> Result<()> {
    let mut bar = filter_bar(ctx, &FilterArgs::default())?;
    let def = open_draft(&mut bar, &key)?;

    match def.filter_type {
        FilterType::Multi => {
            if operator.is_some() || value1.is_some() || value2.is_some() {
                bail!("'{}' is a multi-select filter; use --option", key);
            }
            if !options.is_empty() {
                bar.clear_options();
                for option in &options {
                    toggle_known_option(&mut bar, def, option)?;
                }
            }
            bar.set_match(match_mode.into());
        }
        FilterType::Number | FilterType::Date => {
            if !options.is_empty() {
                bail!("'{}' is a {} filter; use --operator and --value1", key, def.filter_type);
            }
            if let Some(phrase) = &operator {
                bar.set_operator(phrase)?;
            }
            if let Some(v) = value1 {
                bar.set_value1(v);
            }
            if let Some(v) = value2 {
                bar.set_value2(v);
            }
        }
        FilterType::Text => {
            if !options.is_empty() || operator.is_some() {
                bail!("'{}' is a text filter; use --value1", key);
            }
            if let Some(v) = value1 {
                bar.set_text(v);
            }
        }
    }

    let draft = bar
        .draft()
        .cloned()
        .with_context(|| format!("No draft open for '{}'", key))?;
    let result = present_filter_preview(&bar, &draft, def);

    let renderer = ConsoleRenderer::new(format.into(), ViewMode::Standard);
    renderer.render(result)?;
    Ok(())
}

/// Filter bar for the active mode with `--filter` specs applied in order
pub(crate) fn filter_bar(ctx: &ExecutionContext, args: &FilterArgs) -> Result<FilterBar> {
    let mode = ctx.mode()?;
    let mut bar = if args.no_defaults {
        FilterBar::with_applied(mode, Vec::new())
    } else {
        FilterBar::new(mode)
    };
    bar.set_currency(ctx.config()?.currency.clone());

    for raw in &args.filters {
        let spec = FilterSpec::parse(raw)?;
        apply_spec(&mut bar, &spec)?;
    }
    Ok(bar)
}

/// Drive one spec through the same select / edit / apply steps as the editor
pub(crate) fn apply_spec(bar: &mut FilterBar, spec: &FilterSpec) -> Result<()> {
    let def = open_draft(bar, &spec.key)?;

    let outcome = match (&spec.value, def.filter_type) {
        (SpecValue::Assign(raw), FilterType::Multi) => {
            bar.clear_options();
            raw.split(',')
                .map(str::trim)
                .filter(|option| !option.is_empty())
                .try_for_each(|option| toggle_known_option(bar, def, option))
        }
        (SpecValue::Assign(raw), FilterType::Text) => {
            bar.set_text(raw.trim());
            Ok(())
        }
        (
            SpecValue::Compare {
                operator,
                value1,
                value2,
            },
            FilterType::Number | FilterType::Date,
        ) => match bar.set_operator(operator) {
            Ok(()) => {
                bar.set_value1(value1.trim());
                bar.set_value2(value2.trim());
                Ok(())
            }
            Err(e) => Err(anyhow::Error::from(e)),
        },
        (SpecValue::Assign(_), filter_type) => Err(anyhow::anyhow!(
            "'{}' is a {} filter, expected {}:operator:value1[:value2]",
            spec.key,
            filter_type,
            spec.key
        )),
        (SpecValue::Compare { .. }, filter_type) => Err(anyhow::anyhow!(
            "'{}' is a {} filter, expected {}=value",
            spec.key,
            filter_type,
            spec.key
        )),
    };

    if let Err(e) = outcome {
        bar.cancel();
        return Err(e);
    }

    bar.apply();
    debug!(key = %spec.key, "filter spec applied");
    Ok(())
}

fn open_draft(bar: &mut FilterBar, key: &str) -> Result<&'static FilterDefinition> {
    let Some(def) = bar.definition(key) else {
        bail!("Unknown filter '{}' in {} mode", key, bar.mode());
    };
    // an applied filter is edited from its chip so the draft starts from its value
    let opened = if bar.get(key).is_some() {
        bar.edit_chip(key)
    } else {
        bar.select_filter(key)
    };
    if !opened {
        bail!("Could not open filter '{}'", key);
    }
    Ok(def)
}

fn toggle_known_option(bar: &mut FilterBar, def: &FilterDefinition, option: &str) -> Result<()> {
    if !def.options.contains(&option) {
        bail!(
            "'{}' is not an option of {} (expected one of: {})",
            option,
            def.label,
            def.options.join(", ")
        );
    }
    bar.toggle_option(option);
    Ok(())
}

fn terminal_width() -> u16 {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w)
        .unwrap_or(FALLBACK_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_engine::chip_text;
    use brandflow_types::AccountMode;

    fn apply(bar: &mut FilterBar, raw: &str) -> Result<()> {
        apply_spec(bar, &FilterSpec::parse(raw)?)
    }

    fn chip(bar: &FilterBar, key: &str) -> String {
        let applied = bar.get(key).unwrap();
        chip_text(applied, bar.definition(key), bar.currency())
    }

    #[test]
    fn test_number_spec_builds_chip() {
        let mut bar = FilterBar::with_applied(AccountMode::Seller, Vec::new());
        apply(&mut bar, "price:between:10:50").unwrap();
        assert_eq!(chip(&bar, "price"), "Price between $10 and $50");
        assert!(!bar.is_open());
    }

    #[test]
    fn test_multi_spec_replaces_existing_options() {
        let mut bar = FilterBar::new(AccountMode::Seller);
        apply(&mut bar, "activePackageTypes=FBA").unwrap_err();
        apply(&mut bar, "activePackageTypes=Amazon - DSP").unwrap();
        assert_eq!(chip(&bar, "activePackageTypes"), "Active Package Types: Amazon - DSP");
        assert_eq!(bar.applied().len(), 2);
    }

    #[test]
    fn test_mismatched_spec_leaves_bar_closed() {
        let mut bar = FilterBar::with_applied(AccountMode::Seller, Vec::new());
        let err = apply(&mut bar, "status:equals:3").unwrap_err();
        assert!(err.to_string().contains("multi filter"));
        assert!(!bar.is_open());
        assert!(bar.applied().is_empty());
    }

    #[test]
    fn test_mode_scoped_key_is_rejected() {
        let mut bar = FilterBar::with_applied(AccountMode::Vendor, Vec::new());
        let err = apply(&mut bar, "fulfillmentChannel=FBA").unwrap_err();
        assert!(err.to_string().contains("Unknown filter"));
    }
}
