//! Scan providers.
//!
//! The cycle driver consumes scans through the `ScanProvider` trait so the
//! tracking core stays testable without root privilege or a radio.

use std::future::Future;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use crate::error::ScanError;

/// A hung `iw` call otherwise blocks the whole loop; bound it and treat
/// the timeout as a failed cycle.
pub const DEFAULT_SCAN_TIMEOUT_SECS: u64 = 20;

/// Source of raw scan reports.
pub trait ScanProvider {
    /// Produce one scan report's text.
    ///
    /// An empty report is a valid result (no APs in range); failures to
    /// obtain a report at all come back as `ScanError`.
    fn scan(&self) -> impl Future<Output = Result<String, ScanError>> + Send;
}

/// Scans by invoking `iw dev <interface> scan flush`.
///
/// Requires root (CAP_NET_ADMIN); callers check privilege before
/// entering a scan loop.
#[derive(Debug, Clone)]
pub struct IwScanner {
    interface: String,
    timeout: Duration,
}

impl IwScanner {
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            timeout: Duration::from_secs(DEFAULT_SCAN_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }
}

impl ScanProvider for IwScanner {
    async fn scan(&self) -> Result<String, ScanError> {
        let output = timeout(
            self.timeout,
            Command::new("iw")
                .args(["dev", &self.interface, "scan", "flush"])
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| ScanError::Timeout(self.timeout.as_secs()))??;

        if !output.status.success() {
            return Err(ScanError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ScanError::InvalidOutput)
    }
}
