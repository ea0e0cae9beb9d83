//! Table-formatted output for the watch loop.

use chrono::{Local, TimeZone};
use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use ap_census_core::{ApKey, CycleRecord, SignalQuality};

use super::OutputFormatter;

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }

    fn quality_cell(quality: SignalQuality) -> Cell {
        let color = match quality {
            SignalQuality::Excellent | SignalQuality::Good => Color::Green,
            SignalQuality::Reliable => Color::Yellow,
            SignalQuality::NotGood | SignalQuality::Unreliable => Color::Red,
        };
        Cell::new(quality.as_str()).fg(color)
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_cycle(&self, record: &CycleRecord, evicted: &[ApKey], ttl_secs: i64) -> String {
        let mut lines = Vec::new();

        let when = Local
            .timestamp_opt(record.ts, 0)
            .single()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| record.ts.to_string());
        lines.push(format!("Cycle at {}", when.bold()));

        for key in evicted {
            lines.push(
                format!("Haven't seen {} for more than {} secs", key, ttl_secs)
                    .dimmed()
                    .to_string(),
            );
        }

        if record.aps.is_empty() {
            lines.push("No access points observed.".to_string());
        } else {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![
                "BSS", "Ch", "Signal", "Quality", "Devices", "Util %", "SSIDs",
            ]);

            for ap in &record.aps {
                table.add_row(vec![
                    Cell::new(&ap.display_bss),
                    Cell::new(ap.channel.to_string()),
                    Cell::new(format!("{:.1} dBm", ap.signal_dbm)),
                    Self::quality_cell(SignalQuality::classify(ap.signal_dbm)),
                    Cell::new(ap.station_count.to_string()),
                    Cell::new(format!("{:.1}", ap.utilization_pct)),
                    Cell::new(truncate(&ap.ssids.join(","), 40)),
                ]);
            }

            lines.push(table.to_string());
        }

        lines.push(format!(
            "devices = {}",
            record.total_devs.to_string().bold()
        ));

        lines.join("\n")
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
