//! Core library for ap-census.
//!
//! Turns raw `iw` scan reports into TTL-tracked logical access points with
//! per-cycle occupancy summaries. All algorithmic content lives here so it
//! can be exercised without root privilege or a wireless interface; the CLI
//! crate only drives the cycle loop and renders results.

pub mod aggregate;
pub mod error;
pub mod journal;
pub mod key;
pub mod scan;
pub mod tracker;
pub mod types;

pub use aggregate::{aggregate, aggregate_all, total_stations, SignalQuality};
pub use error::{CoreError, Result, ScanError, StorageError};
pub use journal::{CycleJournal, CycleRecord};
pub use key::ApKey;
pub use tracker::{Group, PresenceTracker, DEFAULT_TTL_SECS};
pub use types::{ApSummary, Observation};
