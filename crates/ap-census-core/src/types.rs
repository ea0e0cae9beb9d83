//! Data model shared across the core.

use serde::{Deserialize, Serialize};

/// One radio as reported by a single scan cycle.
///
/// A physical access point commonly exposes several of these, one per
/// band, with BSS addresses differing only in the low octet. Produced by
/// the report parser and immutable from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// BSS hardware address, colon-separated lowercase hex.
    pub bss: String,
    /// Advertised network names seen for this radio in this scan.
    pub ssids: Vec<String>,
    /// Receive signal strength in dBm (more negative = weaker).
    pub signal_dbm: f64,
    /// Number of clients currently associated to this radio.
    pub station_count: u32,
    /// Fraction of channel time busy, 0-100.
    pub utilization_pct: f64,
    /// Primary channel number.
    pub channel: u32,
}

impl Observation {
    /// Primary SSID, or the empty string if the scan reported none.
    pub fn primary_ssid(&self) -> &str {
        self.ssids.first().map(String::as_str).unwrap_or("")
    }
}

/// Externally visible summary for one logical access point in one cycle.
///
/// Field names follow the legacy capture format so journals stay
/// comparable across tool versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApSummary {
    /// Shared BSS prefix with the per-radio low octet collapsed to `*`.
    #[serde(rename = "bss")]
    pub display_bss: String,
    /// One SSID per member radio, in member order (duplicates allowed).
    pub ssids: Vec<String>,
    /// Arithmetic mean of member signal strengths, dBm.
    #[serde(rename = "signal")]
    pub signal_dbm: f64,
    /// Associated clients, taken from the first member radio.
    #[serde(rename = "associated_count")]
    pub station_count: u32,
    /// Channel utilization percent, taken from the first member radio.
    #[serde(rename = "utilization")]
    pub utilization_pct: f64,
    /// Primary channel, taken from the first member radio.
    pub channel: u32,
    /// Epoch seconds of the most recent cycle that observed this AP.
    pub last_seen: i64,
}
