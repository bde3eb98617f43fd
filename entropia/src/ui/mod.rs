//! Terminal presentation: themes, message helpers and report rendering.

pub mod output_format;
pub mod report_table;
pub mod theme;
