//! Output formatting for subnet reports.
//!
//! - [`report`] - summary block and subnet table
//! - [`terminal`] - column and heading helpers

mod report;
mod terminal;

pub use report::{usable_range, write_subnet_table, write_summary};
pub use terminal::{format_field, heading};
