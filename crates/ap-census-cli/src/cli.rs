//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// ap-census - Wi-Fi access point presence and occupancy monitor
#[derive(Parser, Debug)]
#[command(name = "ap-census")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan continuously and report logical APs with occupancy estimates
    Watch(WatchArgs),

    /// Extract a plottable device-count series from a journal file
    Sample(SampleArgs),
}

// ==================== Watch ====================

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Wireless interface to scan on (e.g. wlan0)
    pub interface: String,

    /// Seconds to sleep between scan cycles
    pub interval: u64,

    /// Seconds an AP may stay unseen before it is dropped
    #[arg(long, default_value = "300", env = "AP_CENSUS_TTL")]
    pub ttl: i64,

    /// Append one JSON record per cycle to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Abort a single scan invocation after this many seconds
    #[arg(long, default_value = "20")]
    pub scan_timeout: u64,
}

// ==================== Sample ====================

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Journal file written by `watch --output`
    pub journal: PathBuf,

    /// Number of leading records to skip
    #[arg(long, default_value = "1")]
    pub start: usize,

    /// Only count APs seen within this many seconds of each cycle
    #[arg(long, default_value = "60")]
    pub window: i64,

    /// Data file to write (tab-separated, gnuplot-friendly)
    #[arg(short, long, default_value = "data.dat")]
    pub output: PathBuf,
}
