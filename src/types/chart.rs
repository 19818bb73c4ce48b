use crate::core::constants::DEFAULT_SEGMENT_COLOR;
use serde::{Deserialize, Serialize};

/// One named share of a stacked bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSegment {
    pub name: String,
    /// Share of the whole bar, 0 to 100
    pub percentage: f64,
    pub volume_usd: f64,
    #[serde(default)]
    pub color: Option<String>,
}

impl ChartSegment {
    pub fn new(name: impl Into<String>, percentage: f64, volume_usd: f64) -> Self {
        Self {
            name: name.into(),
            percentage,
            volume_usd,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Fill color, falling back to the default grey
    pub fn fill(&self) -> &str {
        match self.color.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_SEGMENT_COLOR,
        }
    }

    /// Percentage clamped into 0..=100; non-finite values count as 0
    pub fn clamped_percentage(&self) -> f64 {
        if self.percentage.is_finite() {
            self.percentage.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}
