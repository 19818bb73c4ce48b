//! CLI command implementations
//!
//! Each module contains the command definitions and execution logic
//! for one dashboard component.

pub mod chart;
pub mod tokens;
pub mod vote;
