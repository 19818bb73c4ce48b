//! Rendering collaborators shared by the components.
//!
//! Components describe what to draw through the view types in this module
//! (`TableView`, `ProgressBar`); the renderer traits turn those descriptions
//! into output. The terminal implementations back the `kdxdash` binary.

pub mod color;
pub mod progress;
pub mod table;

pub use color::{hex_to_ansi256, styled_swatch};
pub use progress::{BarVariant, ProgressBar, ProgressRenderer, TerminalProgressRenderer};
pub use table::{Column, RowAction, TableRenderer, TableView, TerminalTableRenderer};
