//! UI primitives for the recipes CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color)
//! - **Mode**: `--format` values and output mode selection
//! - **Theme**: Badge tokens and color styles
//! - **Render**: Tables, headers, receipts, hints, bar charts
//! - **Format**: String utilities (truncate, pad, datetimes)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::{OutputFormat, OutputMode};
pub use theme::Badge;

pub use render::{
    badge, bar_chart, blank_line, header, hint, kv, print, print_error, receipt, simple_table,
};

pub use format::{format_datetime, single_line, truncate};
