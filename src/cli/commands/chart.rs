//! Stacked bar chart command.

use crate::catalog::default_catalog;
use crate::cli::utils::{print_warning, resolve_config};
use crate::cli::Cli;
use crate::components::StackedBarChart;
use crate::types::ChartSegment;
use clap::Args;
use std::path::PathBuf;

/// Draw a stacked bar from a JSON list of segments
#[derive(Args, Clone)]
pub struct ChartCommand {
    /// JSON array of `{"name", "percentage", "volumeUsd", "color"}`
    #[arg(short, long)]
    pub file: PathBuf,

    #[arg(short, long, default_value = "Volume")]
    pub title: String,

    /// Text at the right of the header
    #[arg(long)]
    pub right: Option<String>,

    /// Show the tooltip for this segment
    #[arg(long)]
    pub hover: Option<String>,

    /// Bar width in cells (defaults to the configured width)
    #[arg(short, long)]
    pub width: Option<usize>,
}

/// Execute the chart command
pub async fn execute(cmd: ChartCommand, cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;
    let contents = std::fs::read_to_string(&cmd.file)?;
    let segments: Vec<ChartSegment> = serde_json::from_str(&contents)?;

    let total: f64 = segments.iter().map(|s| s.clamped_percentage()).sum();
    if (total - 100.0).abs() > 0.5 {
        print_warning(&format!("Segment percentages add up to {:.2}%", total));
    }

    let mut chart = StackedBarChart::new(cmd.title, segments).with_catalog(default_catalog());
    if let Some(right) = cmd.right {
        chart = chart.with_right_component(right);
    }
    if let Some(name) = &cmd.hover {
        chart.on_mouse_enter(name);
        if chart.tooltip().is_none() {
            print_warning(&format!("No segment named '{}'", name));
        }
    }

    let width = cmd.width.unwrap_or(config.display.bar_width as usize);
    println!("{}", chart.render_terminal(width));
    Ok(())
}
