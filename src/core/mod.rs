//! Core definitions for the dashboard

pub mod constants;
