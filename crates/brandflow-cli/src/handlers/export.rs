use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::handlers::products::configure_table;
use crate::presentation::presenters::{build_product_table, present_export_result};
use crate::presentation::view_models::ProductTableViewModel;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

pub fn handle(
    ctx: &ExecutionContext,
    preset: Option<String>,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut state = ctx.analytics()?;
    configure_table(&mut state, preset.as_deref(), None)?;
    let table = build_product_table(&state, None);

    let Some(path) = output else {
        write_csv(&table, std::io::stdout().lock())?;
        return Ok(());
    };

    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(&table, file)?;
    info!(path = %path.display(), rows = table.rows.len(), "table exported");

    let result = present_export_result(&path, table.rows.len(), table.headers.len());
    let renderer = ConsoleRenderer::new(format.into(), ViewMode::default());
    renderer.render(result)?;
    Ok(())
}

/// One header row of column labels, then the displayed cell values
fn write_csv<W: Write>(table: &ProductTableViewModel, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&table.headers)?;
    for row in &table.rows {
        csv.write_record(row.cells.iter().map(|cell| cell.display.as_str()))?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_engine::AnalyticsState;
    use brandflow_types::AccountMode;

    #[test]
    fn test_csv_has_header_and_a_row_per_product() {
        let state = AnalyticsState::new(AccountMode::Seller);
        let table = build_product_table(&state, None);

        let mut buf = Vec::new();
        write_csv(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), table.rows.len() + 1);
        assert!(lines[0].starts_with(&table.headers[0]));
    }
}
