//! Watch command: the scan-aggregate-report cycle loop.

use std::io::{self, Write};
use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;

use ap_census_core::aggregate::{aggregate_all, total_stations};
use ap_census_core::scan::{IwScanner, ReportParser, ScanProvider};
use ap_census_core::{ApKey, CycleJournal, CycleRecord, PresenceTracker, ScanError};

use crate::cli::WatchArgs;
use crate::error::CliError;
use crate::output::{get_formatter, OutputFormatter};

/// Run the watch command
pub async fn run_watch(args: WatchArgs, json: bool) -> Result<(), CliError> {
    if !running_as_root() {
        return Err(CliError::InsufficientPrivilege);
    }
    if args.interval == 0 {
        return Err(CliError::InvalidArgument(
            "interval must be at least 1 second".to_string(),
        ));
    }
    if args.ttl <= 0 {
        return Err(CliError::InvalidArgument(
            "ttl must be positive".to_string(),
        ));
    }

    let formatter = get_formatter(json);
    let scanner =
        IwScanner::new(&args.interface).with_timeout(Duration::from_secs(args.scan_timeout));
    let parser = ReportParser::new();
    let mut tracker = PresenceTracker::new(args.ttl);
    let journal = args.output.as_ref().map(CycleJournal::new);

    if !json {
        println!(
            "Scanning on {} every {}s, TTL {}s (press Ctrl+C to stop)...",
            scanner.interface(),
            args.interval,
            args.ttl
        );
    }

    loop {
        let now = Utc::now().timestamp();
        let (record, evicted, scan_failure) = run_cycle(&scanner, &parser, &mut tracker, now).await;

        render(formatter.as_ref(), &record, &evicted, args.ttl, json);
        if let Some(e) = scan_failure {
            eprintln!("Warning: scan failed this cycle: {}", e);
        }

        if let Some(ref journal) = journal {
            if let Err(e) = journal.append(&record).await {
                eprintln!(
                    "Warning: could not append to {}: {}",
                    journal.path().display(),
                    e
                );
            }
        }

        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = sleep(Duration::from_secs(args.interval)) => {}
        }
    }

    Ok(())
}

/// One cycle: scan, parse, fold into the tracker, aggregate.
///
/// A failed scan yields an empty observation set so the TTL sweep still
/// runs; the error is handed back for reporting rather than killing the
/// loop.
async fn run_cycle<P: ScanProvider>(
    scanner: &P,
    parser: &ReportParser,
    tracker: &mut PresenceTracker,
    now: i64,
) -> (CycleRecord, Vec<ApKey>, Option<ScanError>) {
    let (observations, scan_failure) = match scanner.scan().await {
        Ok(report) => (parser.parse(&report), None),
        Err(e) => (Vec::new(), Some(e)),
    };

    let evicted = tracker.observe(observations, now);
    let summaries = aggregate_all(tracker);
    let record = CycleRecord {
        ts: now,
        total_devs: total_stations(&summaries),
        aps: summaries,
    };

    (record, evicted, scan_failure)
}

fn render(
    formatter: &dyn OutputFormatter,
    record: &CycleRecord,
    evicted: &[ApKey],
    ttl_secs: i64,
    json: bool,
) {
    if !json {
        // Redraw in place, like a one-screen dashboard.
        print!("\x1B[2J\x1B[1;1H");
    }
    println!("{}", formatter.format_cycle(record, evicted, ttl_secs));
    io::stdout().flush().ok();
}

fn running_as_root() -> bool {
    // Scanning needs CAP_NET_ADMIN; effective uid 0 is the practical check.
    unsafe { libc::geteuid() == 0 }
}
