//! Wireless scan invocation and report parsing.

pub mod provider;
pub mod report;

pub use provider::{IwScanner, ScanProvider, DEFAULT_SCAN_TIMEOUT_SECS};
pub use report::ReportParser;
