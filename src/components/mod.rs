//! Dashboard view components
//!
//! Each component is independent: it owns its inputs and local view state
//! and renders through the traits in [`crate::render`].

pub mod liquidity_tokens_table;
pub mod stacked_bar_chart;
pub mod vote_results;

pub use liquidity_tokens_table::{LiquidityTokensTable, TableState};
pub use stacked_bar_chart::{CellSpan, Corners, LegendEntry, SegmentLayout, StackedBarChart, Tooltip};
pub use vote_results::{VoteHandler, VoteOptionView, VoteResultsContainer, VoteResultsView, VoteSide};
