//! Generic table view: items, column descriptors and row actions.

use crate::errors::{DashboardResult, RenderError};
use crate::navigation::{NavigationRequest, Navigator};
use comfy_table::{presets::UTF8_FULL, ColumnConstraint, ContentArrangement, Table, Width};
use console::style;

/// Approximate pixels per terminal cell when sizing columns
const PIXELS_PER_CELL: u16 = 10;

type CellFn<T> = Box<dyn Fn(&T) -> String + Send + Sync>;
type ActionFn<T> = Box<dyn Fn(&T) -> NavigationRequest + Send + Sync>;

/// A named column with a fixed width and a cell renderer.
pub struct Column<T> {
    pub name: String,
    /// Width in pixels
    pub width: u16,
    render: CellFn<T>,
}

impl<T> Column<T> {
    pub fn new(
        name: impl Into<String>,
        width: u16,
        render: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            render: Box::new(render),
        }
    }

    pub fn render(&self, item: &T) -> String {
        (self.render)(item)
    }
}

/// An action shown on every row that navigates somewhere.
pub struct RowAction<T> {
    pub icon: String,
    pub label: String,
    on_click: ActionFn<T>,
}

impl<T> RowAction<T> {
    pub fn new(
        icon: impl Into<String>,
        label: impl Into<String>,
        on_click: impl Fn(&T) -> NavigationRequest + Send + Sync + 'static,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            on_click: Box::new(on_click),
        }
    }

    /// Navigation the action would perform for `item`
    pub fn request_for(&self, item: &T) -> NavigationRequest {
        (self.on_click)(item)
    }
}

/// Everything a table renderer needs.
pub struct TableView<T> {
    pub items: Vec<T>,
    pub columns: Vec<Column<T>>,
    pub actions: Vec<RowAction<T>>,
}

impl<T> TableView<T> {
    pub fn new(items: Vec<T>, columns: Vec<Column<T>>) -> Self {
        Self {
            items,
            columns,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: RowAction<T>) -> Self {
        self.actions.push(action);
        self
    }

    pub fn header(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Rendered cell text, one row per item
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.items
            .iter()
            .map(|item| self.columns.iter().map(|c| c.render(item)).collect())
            .collect()
    }

    /// Run action `action` against row `row`
    pub fn trigger(
        &self,
        action: usize,
        row: usize,
        navigator: &mut dyn Navigator,
    ) -> DashboardResult<NavigationRequest> {
        let action = self.actions.get(action).ok_or_else(|| {
            RenderError::in_component(format!("No row action at index {}", action), "table")
        })?;
        let item = self.items.get(row).ok_or_else(|| {
            RenderError::in_component(format!("No row at index {}", row), "table")
        })?;
        let request = action.request_for(item);
        navigator.push(request.clone());
        Ok(request)
    }

    pub fn render(&self, renderer: &dyn TableRenderer) -> String {
        let widths: Vec<u16> = self.columns.iter().map(|c| c.width).collect();
        let actions: Vec<String> = self.actions.iter().map(|a| a.icon.clone()).collect();
        renderer.render_table(&self.header(), &widths, &self.cells(), &actions)
    }
}

/// Draws materialised table cells.
pub trait TableRenderer {
    fn render_table(
        &self,
        header: &[String],
        widths: &[u16],
        rows: &[Vec<String>],
        actions: &[String],
    ) -> String;
}

/// `comfy-table` renderer with a trailing actions column
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalTableRenderer;

impl TableRenderer for TerminalTableRenderer {
    fn render_table(
        &self,
        header: &[String],
        widths: &[u16],
        rows: &[Vec<String>],
        actions: &[String],
    ) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut titles: Vec<String> = header.iter().map(|h| style(h).bold().to_string()).collect();
        if !actions.is_empty() {
            titles.push(String::new());
        }
        table.set_header(titles);

        for (index, width) in widths.iter().enumerate() {
            if let Some(column) = table.column_mut(index) {
                column.set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(
                    (width / PIXELS_PER_CELL).max(1),
                )));
            }
        }

        let action_cell = actions.join(" ");
        for row in rows {
            let mut cells = row.clone();
            if !actions.is_empty() {
                cells.push(action_cell.clone());
            }
            table.add_row(cells);
        }

        table.to_string()
    }
}
