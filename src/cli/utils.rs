//! CLI utility functions for terminal interaction and formatting.

use crate::cli::Cli;
use crate::config::Config;
use console::{style, Term};
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Pick one of `items`; None when the prompt is cancelled.
pub fn select(message: &str, items: &[&str]) -> Option<usize> {
    Select::new()
        .with_prompt(message)
        .items(items)
        .default(0)
        .interact_opt()
        .ok()
        .flatten()
}

/// Create a spinner progress bar with message.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print success message in green.
pub fn print_success(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("✓").green().bold(), message));
}

/// Print error message in red.
pub fn print_error(message: &str) {
    let term = Term::stderr();
    let _ = term.write_line(&format!("{} {}", style("✗").red().bold(), message));
}

/// Print info message in blue.
pub fn print_info(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("ℹ").blue().bold(), message));
}

/// Print warning message in yellow.
pub fn print_warning(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("⚠").yellow().bold(), message));
}

/// Build the effective config: defaults, then environment, then `--config`
/// file, then an explicit `--network`.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env();

    if let Some(path) = &cli.config {
        config = config.merge(Config::load_from_file(path)?);
    }

    if let Some(network) = &cli.network {
        config = config.with_network(network);
    }

    Ok(config)
}

/// Format a USD amount the way the dashboard shows it
pub fn format_usd(value: f64) -> String {
    format!("$ {}", crate::utils::balance::human_readable_number(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1234.5), "$ 1,234.50");
        assert_eq!(format_usd(0.0), "$ 0.00");
    }

    #[test]
    fn test_resolve_config_network_flag() {
        let cli = Cli::parse_from(["kdxdash", "--network", "testnet", "tokens"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.services.network, "testnet");
    }

    #[test]
    fn test_resolve_config_missing_file() {
        let cli = Cli::parse_from(["kdxdash", "--config", "/nonexistent/kdx.json", "tokens"]);
        assert!(resolve_config(&cli).is_err());
    }
}
