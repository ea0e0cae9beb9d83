//! Output formatting for cycle results.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use ap_census_core::{ApKey, CycleRecord};

/// Output formatter trait
pub trait OutputFormatter {
    /// Format one completed cycle: summaries, total, eviction notices.
    fn format_cycle(&self, record: &CycleRecord, evicted: &[ApKey], ttl_secs: i64) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}
