//! Sample command: turn a journal into a plottable time series.

use std::fmt::Write as _;

use serde_json::json;

use ap_census_core::{CycleJournal, CycleRecord};

use crate::cli::SampleArgs;
use crate::error::CliError;

/// Run the sample command
pub async fn run_sample(args: SampleArgs, json: bool) -> Result<(), CliError> {
    let records = CycleJournal::read_all(&args.journal).await?;

    let points: Vec<(i64, u64)> = records
        .iter()
        .skip(args.start)
        .map(|record| (record.ts, windowed_total(record, args.window)))
        .collect();

    let mut data = String::new();
    for (ts, count) in &points {
        // Tab-separated so gnuplot can consume it directly.
        let _ = writeln!(data, "{}\t{}", ts, count);
    }
    tokio::fs::write(&args.output, data).await?;

    if json {
        let output = json!({
            "journal": args.journal,
            "output": args.output,
            "points": points.len(),
            "window": args.window,
        });
        println!("{}", serde_json::to_string(&output).unwrap_or_default());
    } else {
        println!(
            "Wrote {} points to {} (window {}s)",
            points.len(),
            args.output.display(),
            args.window
        );
    }

    Ok(())
}

/// Device count for one cycle, restricted to APs actually seen within
/// `window` seconds of the cycle.
///
/// Tighter than the recorded `totalDevs`: that figure includes stale
/// groups still inside the TTL, which overstates occupancy when plotting
/// at fine granularity.
fn windowed_total(record: &CycleRecord, window: i64) -> u64 {
    record
        .aps
        .iter()
        .filter(|ap| record.ts - ap.last_seen < window)
        .map(|ap| u64::from(ap.station_count))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ap_census_core::ApSummary;

    fn summary(stations: u32, last_seen: i64) -> ApSummary {
        ApSummary {
            display_bss: "aa:bb:cc:dd:ee:*".to_string(),
            ssids: vec!["Net".to_string()],
            signal_dbm: -50.0,
            station_count: stations,
            utilization_pct: 0.0,
            channel: 6,
            last_seen,
        }
    }

    #[test]
    fn test_windowed_total_excludes_stale_groups() {
        let record = CycleRecord {
            ts: 1000,
            total_devs: 7,
            aps: vec![summary(3, 1000), summary(4, 900)],
        };

        assert_eq!(windowed_total(&record, 60), 3);
        assert_eq!(windowed_total(&record, 200), 7);
    }

    #[test]
    fn test_windowed_total_boundary_is_exclusive() {
        let record = CycleRecord {
            ts: 1000,
            total_devs: 2,
            aps: vec![summary(2, 940)],
        };

        // ts - last_seen == window is already outside the window.
        assert_eq!(windowed_total(&record, 60), 0);
        assert_eq!(windowed_total(&record, 61), 2);
    }

    #[tokio::test]
    async fn test_sample_writes_tab_separated_series() {
        let dir = tempfile::tempdir().unwrap();
        let journal_path = dir.path().join("census.ndjson");
        let journal = CycleJournal::new(&journal_path);

        for (ts, stations) in [(1000, 2u32), (1010, 3), (1020, 1)] {
            journal
                .append(&CycleRecord {
                    ts,
                    total_devs: stations as u64,
                    aps: vec![summary(stations, ts)],
                })
                .await
                .unwrap();
        }

        let out_path = dir.path().join("data.dat");
        run_sample(
            SampleArgs {
                journal: journal_path,
                start: 1,
                window: 60,
                output: out_path.clone(),
            },
            false,
        )
        .await
        .unwrap();

        let data = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(data, "1010\t3\n1020\t1\n");
    }
}
