use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, OutputFormat, ViewMode};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{} {}", badge.icon(), badge.label.bold());
            println!();
        }

        print!("{}", result.content.create_view(self.mode));

        if !result.suggestions.is_empty() {
            println!("\n{}", "💡 Tips:".yellow().bold());
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", cmd.cyan());
                }
                println!();
            }
        }

        Ok(())
    }
}
