//! Horizontal stacked bar with a legend and hover tooltip.

use crate::catalog::TokenCatalog;
use crate::core::constants::BAR_CORNER_RADIUS;
use crate::render::styled_swatch;
use crate::types::ChartSegment;
use crate::utils::balance::human_readable_number;
use console::style;
use tracing::trace;

/// Rounded ends of a segment. Only the outermost visible segments get any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Corners {
    pub left: bool,
    pub right: bool,
    pub radius: u8,
}

impl Corners {
    fn for_position(index: usize, ends: (usize, usize)) -> Self {
        let left = index == ends.0;
        let right = index == ends.1;
        Self {
            left,
            right,
            radius: if left || right { BAR_CORNER_RADIUS } else { 0 },
        }
    }

    pub fn is_square(&self) -> bool {
        !self.left && !self.right
    }
}

/// Position of one segment along the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLayout {
    pub name: String,
    pub x: f64,
    pub width: f64,
    pub color: String,
    pub corners: Corners,
}

/// Integer cell span of one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSpan {
    pub name: String,
    pub start: usize,
    pub cells: usize,
    pub color: String,
    pub corners: Corners,
}

/// Detail shown for the hovered segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub name: String,
    pub icon: Option<String>,
    pub percentage: String,
    pub volume: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
    pub icon: Option<String>,
    pub label: String,
}

/// Stacked bar chart over an ordered list of segments.
///
/// The hovered segment name is the only state; it is replaced on every
/// enter and cleared on leave.
#[derive(Debug, Clone, Default)]
pub struct StackedBarChart {
    title: String,
    right_component: Option<String>,
    segments: Vec<ChartSegment>,
    catalog: Option<TokenCatalog>,
    hovered: Option<String>,
}

impl StackedBarChart {
    pub fn new(title: impl Into<String>, segments: Vec<ChartSegment>) -> Self {
        Self {
            title: title.into(),
            segments,
            ..Default::default()
        }
    }

    /// Text shown at the right end of the header line
    pub fn with_right_component(mut self, component: impl Into<String>) -> Self {
        self.right_component = Some(component.into());
        self
    }

    /// Catalog used to look up segment icons
    pub fn with_catalog(mut self, catalog: TokenCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn segments(&self) -> &[ChartSegment] {
        &self.segments
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Indices of the first and last segments with a non-zero share; the
    /// first and last segments when none has one
    fn visible_ends(&self) -> (usize, usize) {
        let visible = |s: &ChartSegment| s.clamped_percentage() > 0.0;
        let first = self.segments.iter().position(visible).unwrap_or(0);
        let last = self
            .segments
            .iter()
            .rposition(visible)
            .unwrap_or(self.segments.len().saturating_sub(1));
        (first, last)
    }

    fn icon_for(&self, name: &str) -> Option<String> {
        self.catalog
            .as_ref()
            .and_then(|c| c.icon_for(name))
            .map(str::to_string)
    }

    /// Fractional layout across `width` units
    pub fn layout(&self, width: f64) -> Vec<SegmentLayout> {
        let ends = self.visible_ends();
        let mut x = 0.0;
        self.segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                let w = segment.clamped_percentage() / 100.0 * width;
                let layout = SegmentLayout {
                    name: segment.name.clone(),
                    x,
                    width: w,
                    color: segment.fill().to_string(),
                    corners: Corners::for_position(i, ends),
                };
                x += w;
                layout
            })
            .collect()
    }

    /// Whole-cell spans for a bar `cells` wide.
    ///
    /// Boundaries are rounded from cumulative percentages, so the spans add
    /// up to `cells` whenever the percentages add up to 100.
    pub fn cell_spans(&self, cells: usize) -> Vec<CellSpan> {
        let ends = self.visible_ends();
        let mut cumulative = 0.0;
        let mut start = 0usize;
        self.segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                cumulative += segment.clamped_percentage();
                let boundary = ((cumulative / 100.0 * cells as f64).round() as usize)
                    .clamp(start, cells);
                let span = CellSpan {
                    name: segment.name.clone(),
                    start,
                    cells: boundary - start,
                    color: segment.fill().to_string(),
                    corners: Corners::for_position(i, ends),
                };
                start = boundary;
                span
            })
            .collect()
    }

    pub fn on_mouse_enter(&mut self, name: &str) {
        trace!(segment = name, "Segment hovered");
        self.hovered = Some(name.to_string());
    }

    pub fn on_mouse_leave(&mut self) {
        self.hovered = None;
    }

    /// Hover whichever segment covers position `x` on a bar `width` wide;
    /// positions outside every segment clear the hover.
    pub fn hover_at(&mut self, x: f64, width: f64) -> Option<&str> {
        let hit = self
            .layout(width)
            .into_iter()
            .find(|l| l.width > 0.0 && x >= l.x && x < l.x + l.width)
            .map(|l| l.name);
        match hit {
            Some(name) => self.on_mouse_enter(&name),
            None => self.on_mouse_leave(),
        }
        self.hovered()
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        let name = self.hovered.as_deref()?;
        let segment = self.segments.iter().find(|s| s.name == name)?;
        Some(Tooltip {
            name: segment.name.clone(),
            icon: self.icon_for(&segment.name),
            percentage: format!("{:.2} %", segment.clamped_percentage()),
            volume: format!("$ {}", human_readable_number(segment.volume_usd, 2)),
        })
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        self.segments
            .iter()
            .map(|segment| LegendEntry {
                name: segment.name.clone(),
                color: segment.fill().to_string(),
                icon: self.icon_for(&segment.name),
                label: format!("{} {:.2}%", segment.name, segment.clamped_percentage()),
            })
            .collect()
    }

    /// Header, bar, tooltip (when hovered) and legend, one per line
    pub fn render_terminal(&self, width: usize) -> String {
        let mut lines = Vec::new();

        let header = style(&self.title).bold().to_string();
        match &self.right_component {
            Some(right) => {
                let pad = width.saturating_sub(self.title.chars().count() + right.chars().count());
                lines.push(format!("{}{}{}", header, " ".repeat(pad.max(1)), right));
            }
            None => lines.push(header),
        }

        let bar: String = self
            .cell_spans(width)
            .iter()
            .filter(|span| span.cells > 0)
            .map(|span| styled_swatch(&"█".repeat(span.cells), &span.color))
            .collect();
        lines.push(bar);

        if let Some(tip) = self.tooltip() {
            let icon = tip.icon.map(|i| format!("{} ", i)).unwrap_or_default();
            lines.push(format!(
                "{}{}  {}  {}",
                icon,
                style(&tip.name).bold(),
                tip.percentage,
                tip.volume
            ));
        }

        let legend: Vec<String> = self
            .legend()
            .into_iter()
            .map(|entry| {
                let icon = entry.icon.map(|i| format!("{} ", i)).unwrap_or_default();
                format!("{} {}{}", styled_swatch("■", &entry.color), icon, entry.label)
            })
            .collect();
        lines.push(legend.join("   "));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::core::constants::DEFAULT_SEGMENT_COLOR;

    fn chart() -> StackedBarChart {
        StackedBarChart::new(
            "Volume",
            vec![
                ChartSegment::new("KDA", 50.0, 1000.0).with_color("#FF0000"),
                ChartSegment::new("KDX", 30.0, 600.0),
                ChartSegment::new("zUSDC", 20.0, 400.0).with_color("#00FF00"),
            ],
        )
    }

    #[test]
    fn test_layout_corners() {
        let layout = chart().layout(200.0);
        assert_eq!(layout[0].x, 0.0);
        assert_eq!(layout[0].width, 100.0);
        assert_eq!(layout[1].x, 100.0);
        assert!(layout[0].corners.left && !layout[0].corners.right);
        assert!(layout[1].corners.is_square());
        assert_eq!(layout[1].corners.radius, 0);
        assert!(layout[2].corners.right && !layout[2].corners.left);
        assert_eq!(layout[2].corners.radius, BAR_CORNER_RADIUS);
    }

    #[test]
    fn test_default_color() {
        let layout = chart().layout(100.0);
        assert_eq!(layout[1].color, DEFAULT_SEGMENT_COLOR);
    }

    #[test]
    fn test_single_segment_rounds_both_ends() {
        let chart = StackedBarChart::new("One", vec![ChartSegment::new("KDA", 100.0, 1.0)]);
        let span = &chart.cell_spans(10)[0];
        assert!(span.corners.left && span.corners.right);
        assert_eq!(span.cells, 10);
    }

    #[test]
    fn test_corners_skip_empty_outer_segments() {
        let chart = StackedBarChart::new(
            "Volume",
            vec![
                ChartSegment::new("Empty", 0.0, 0.0),
                ChartSegment::new("KDA", 60.0, 6.0),
                ChartSegment::new("KDX", 40.0, 4.0),
                ChartSegment::new("Unknown", f64::NAN, 0.0),
            ],
        );
        let layout = chart.layout(100.0);
        assert!(layout[0].corners.is_square());
        assert!(layout[1].corners.left && !layout[1].corners.right);
        assert!(layout[2].corners.right && !layout[2].corners.left);
        assert!(layout[3].corners.is_square());

        let spans = chart.cell_spans(10);
        assert_eq!(spans[0].cells, 0);
        assert!(spans[1].corners.left);
        assert!(spans[2].corners.right);
    }

    #[test]
    fn test_non_finite_percentage_formats_as_zero() {
        let mut chart = StackedBarChart::new(
            "Volume",
            vec![
                ChartSegment::new("KDA", 100.0, 1.0),
                ChartSegment::new("Broken", f64::NAN, 1.0),
            ],
        );
        assert_eq!(chart.legend()[1].label, "Broken 0.00%");
        chart.on_mouse_enter("Broken");
        assert_eq!(chart.tooltip().unwrap().percentage, "0.00 %");
        assert!(!chart.render_terminal(10).contains("NaN"));
    }

    #[test]
    fn test_multibyte_color_falls_back_to_grey() {
        let chart = StackedBarChart::new(
            "Volume",
            vec![ChartSegment::new("KDA", 100.0, 1.0).with_color("a€bb")],
        );
        let out = console::strip_ansi_codes(&chart.render_terminal(10)).to_string();
        assert_eq!(out.lines().nth(1).map(|l| l.chars().count()), Some(10));
    }

    #[test]
    fn test_cell_spans_sum_to_width() {
        let chart = StackedBarChart::new(
            "Thirds",
            vec![
                ChartSegment::new("A", 33.33, 1.0),
                ChartSegment::new("B", 33.33, 1.0),
                ChartSegment::new("C", 33.34, 1.0),
            ],
        );
        let spans = chart.cell_spans(10);
        assert_eq!(spans.iter().map(|s| s.cells).sum::<usize>(), 10);
        assert_eq!(spans[1].start, spans[0].cells);
    }

    #[test]
    fn test_hover_updates_and_clears_tooltip() {
        let mut chart = chart().with_catalog(default_catalog());
        assert!(chart.tooltip().is_none());

        chart.on_mouse_enter("KDA");
        let tip = chart.tooltip().unwrap();
        assert_eq!(tip.name, "KDA");
        assert_eq!(tip.percentage, "50.00 %");
        assert_eq!(tip.volume, "$ 1,000.00");
        assert!(tip.icon.is_some());

        chart.on_mouse_enter("KDX");
        assert_eq!(chart.tooltip().unwrap().volume, "$ 600.00");

        chart.on_mouse_leave();
        assert!(chart.tooltip().is_none());
    }

    #[test]
    fn test_hover_at_position() {
        let mut chart = chart();
        assert_eq!(chart.hover_at(10.0, 100.0), Some("KDA"));
        assert_eq!(chart.hover_at(85.0, 100.0), Some("zUSDC"));
        assert_eq!(chart.hover_at(150.0, 100.0), None);
        assert!(chart.hovered().is_none());
    }

    #[test]
    fn test_legend_and_render() {
        let chart = chart().with_right_component("24h");
        let legend = chart.legend();
        assert_eq!(legend[0].label, "KDA 50.00%");
        assert_eq!(legend[2].color, "#00FF00");

        let out = console::strip_ansi_codes(&chart.render_terminal(20)).to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("Volume") && lines[0].ends_with("24h"));
        assert_eq!(lines[1].chars().count(), 20);
        assert!(lines[2].contains("KDX 30.00%"));
    }
}
