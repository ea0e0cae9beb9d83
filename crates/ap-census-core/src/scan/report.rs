//! Line-oriented extraction of observations from an `iw` scan report.

use regex::Regex;

use crate::types::Observation;

/// Stateless adapter from raw report text to per-radio observations.
///
/// Holds the compiled line patterns. Any line matching none of them is
/// silently ignored by design: report formats vary by tool and driver
/// version. A BSS line always opens a new observation; subsequent field
/// lines belong to it until the next BSS line. Field lines arriving
/// before any BSS line are dropped.
pub struct ReportParser {
    bss: Regex,
    station_count: Regex,
    utilization: Regex,
    signal: Regex,
    ssid: Regex,
    channel: Regex,
}

impl ReportParser {
    pub fn new() -> Self {
        Self {
            bss: Regex::new(r"^BSS\s([0-9a-f:]+)").unwrap(),
            station_count: Regex::new(r"station count: (\d+)").unwrap(),
            utilization: Regex::new(r"channel utilisation: (\d+)/(\d+)").unwrap(),
            signal: Regex::new(r"signal: (-?\d+\.\d+) dBm").unwrap(),
            ssid: Regex::new(r"^[ \t]+SSID: (.*)").unwrap(),
            channel: Regex::new(r"primary channel: (\d+)").unwrap(),
        }
    }

    pub fn parse(&self, report: &str) -> Vec<Observation> {
        let mut observations: Vec<Observation> = Vec::new();

        for line in report.lines() {
            if let Some(caps) = self.bss.captures(line) {
                observations.push(Observation {
                    bss: caps[1].to_string(),
                    ssids: Vec::new(),
                    signal_dbm: 0.0,
                    station_count: 0,
                    utilization_pct: 0.0,
                    channel: 0,
                });
                continue;
            }

            let Some(current) = observations.last_mut() else {
                continue;
            };

            if let Some(caps) = self.station_count.captures(line) {
                current.station_count = caps[1].parse().unwrap_or(0);
            } else if let Some(caps) = self.utilization.captures(line) {
                let used: f64 = caps[1].parse().unwrap_or(0.0);
                let total: f64 = caps[2].parse().unwrap_or(0.0);
                if total > 0.0 {
                    current.utilization_pct = 100.0 * used / total;
                }
            } else if let Some(caps) = self.signal.captures(line) {
                current.signal_dbm = caps[1].parse().unwrap_or(0.0);
            } else if let Some(caps) = self.ssid.captures(line) {
                current.ssids.push(caps[1].to_string());
            } else if let Some(caps) = self.channel.captures(line) {
                current.channel = caps[1].parse().unwrap_or(0);
            }
        }

        observations
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
BSS aa:bb:cc:dd:ee:01(on wlan0)
\tlast seen: 123.456s [boottime]
\tfreq: 2437
\tsignal: -45.00 dBm
\tSSID: Net-A
\tHT operation:
\t\t * primary channel: 6
\tBSS Load:
\t\t * station count: 2
\t\t * channel utilisation: 127/255
BSS aa:bb:cc:dd:ee:02(on wlan0)
\tsignal: -55.50 dBm
\tSSID: Net-A-5G
\tHT operation:
\t\t * primary channel: 6
\t\t * station count: 1
\t\t * channel utilisation: 0/255
";

    #[test]
    fn test_parse_two_radios() {
        let observations = ReportParser::new().parse(REPORT);
        assert_eq!(observations.len(), 2);

        let first = &observations[0];
        assert_eq!(first.bss, "aa:bb:cc:dd:ee:01");
        assert_eq!(first.ssids, vec!["Net-A"]);
        assert_eq!(first.signal_dbm, -45.0);
        assert_eq!(first.station_count, 2);
        assert_eq!(first.channel, 6);
        assert!((first.utilization_pct - 100.0 * 127.0 / 255.0).abs() < 1e-9);

        let second = &observations[1];
        assert_eq!(second.bss, "aa:bb:cc:dd:ee:02");
        assert_eq!(second.signal_dbm, -55.5);
        assert_eq!(second.utilization_pct, 0.0);
    }

    #[test]
    fn test_unrecognized_lines_ignored() {
        let report = "BSS aa:bb:cc:dd:ee:01(on wlan0)\n\tcapability: ESS Privacy\n\tRSN: * Version: 1\n\tsignal: -61.00 dBm\n";
        let observations = ReportParser::new().parse(report);
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].signal_dbm, -61.0);
    }

    #[test]
    fn test_field_lines_before_first_bss_dropped() {
        let report = "\tsignal: -40.00 dBm\nBSS aa:bb:cc:dd:ee:01(on wlan0)\n\tsignal: -50.00 dBm\n";
        let observations = ReportParser::new().parse(report);
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].signal_dbm, -50.0);
    }

    #[test]
    fn test_empty_report_yields_no_observations() {
        assert!(ReportParser::new().parse("").is_empty());
    }

    #[test]
    fn test_ssid_list_header_not_mistaken_for_ssid() {
        let report = "BSS aa:bb:cc:dd:ee:01(on wlan0)\n\tSSID List\n\tSSID: Real-Name\n";
        let observations = ReportParser::new().parse(report);
        assert_eq!(observations[0].ssids, vec!["Real-Name"]);
    }
}
