//! Horizontal progress bar view.

use console::style;
use serde::{Deserialize, Serialize};

/// Visual variant of a progress bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarVariant {
    #[default]
    Light,
    Dark,
}

/// A `current / max` pair to be drawn as a bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressBar {
    pub current: f64,
    pub max: f64,
    pub variant: BarVariant,
}

impl ProgressBar {
    pub fn new(current: f64, max: f64) -> Self {
        Self {
            current,
            max,
            variant: BarVariant::Light,
        }
    }

    pub fn dark(mut self) -> Self {
        self.variant = BarVariant::Dark;
        self
    }

    /// Filled fraction in `[0, 1]`.
    ///
    /// A zero, negative or non-finite maximum yields an empty bar.
    pub fn ratio(&self) -> f64 {
        if !self.max.is_finite() || self.max <= 0.0 || !self.current.is_finite() {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }

    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }
}

/// Draws progress bars.
pub trait ProgressRenderer {
    fn render_progress(&self, bar: &ProgressBar) -> String;
}

/// Block-character bar for terminals
#[derive(Debug, Clone, Copy)]
pub struct TerminalProgressRenderer {
    /// Bar width in cells
    pub width: usize,
}

impl Default for TerminalProgressRenderer {
    fn default() -> Self {
        Self { width: 30 }
    }
}

impl TerminalProgressRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Number of filled cells for `bar`
    pub fn filled_cells(&self, bar: &ProgressBar) -> usize {
        ((bar.ratio() * self.width as f64).round() as usize).min(self.width)
    }
}

impl ProgressRenderer for TerminalProgressRenderer {
    fn render_progress(&self, bar: &ProgressBar) -> String {
        let filled = self.filled_cells(bar);
        let fill = "█".repeat(filled);
        let rest = "░".repeat(self.width - filled);
        let fill = match bar.variant {
            BarVariant::Light => style(fill).white().to_string(),
            BarVariant::Dark => style(fill).black().bright().to_string(),
        };
        format!("{}{} {:>6.2}%", fill, style(rest).dim(), bar.percent())
    }
}
