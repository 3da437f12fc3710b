//! Output formatting for experiment reports.

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_report, format_report_full, format_shapes, is_verbose};
