//! Group aggregation and signal-quality classification.

use serde::Serialize;

use crate::key::ApKey;
use crate::tracker::{Group, PresenceTracker};
use crate::types::ApSummary;

/// Display-only signal classification. Carries no further state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalQuality {
    Excellent,
    Good,
    Reliable,
    #[serde(rename = "not good")]
    NotGood,
    Unreliable,
}

impl SignalQuality {
    pub fn classify(signal_dbm: f64) -> Self {
        if signal_dbm >= -50.0 {
            SignalQuality::Excellent
        } else if signal_dbm >= -60.0 {
            SignalQuality::Good
        } else if signal_dbm >= -67.0 {
            SignalQuality::Reliable
        } else if signal_dbm >= -70.0 {
            SignalQuality::NotGood
        } else {
            SignalQuality::Unreliable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalQuality::Excellent => "excellent",
            SignalQuality::Good => "good",
            SignalQuality::Reliable => "reliable",
            SignalQuality::NotGood => "not good",
            SignalQuality::Unreliable => "unreliable",
        }
    }
}

/// Reduce one group into its logical-AP summary.
///
/// Total over any non-empty group; the tracker never stores empty ones.
/// Signal is the arithmetic mean over members (realistic counts are 1-8
/// radios per AP, so the summed-division loss is acceptable); the other
/// numeric fields are representative, taken from the first member rather
/// than summed or averaged.
pub fn aggregate(key: &ApKey, group: &Group) -> ApSummary {
    let first = &group.members[0];
    let sum: f64 = group.members.iter().map(|m| m.signal_dbm).sum();

    ApSummary {
        display_bss: key.display_bss(),
        ssids: group
            .members
            .iter()
            .map(|m| m.primary_ssid().to_string())
            .collect(),
        signal_dbm: sum / group.members.len() as f64,
        station_count: first.station_count,
        utilization_pct: first.utilization_pct,
        channel: first.channel,
        last_seen: group.last_seen,
    }
}

/// Summarize every live group, strongest signal first.
pub fn aggregate_all(tracker: &PresenceTracker) -> Vec<ApSummary> {
    let mut summaries: Vec<ApSummary> = tracker
        .groups()
        .map(|(key, group)| aggregate(key, group))
        .collect();

    // Stable on ties; NaN never occurs since members are non-empty.
    summaries.sort_by(|a, b| {
        b.signal_dbm
            .partial_cmp(&a.signal_dbm)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    summaries
}

/// Device-count estimate for one cycle.
pub fn total_stations(summaries: &[ApSummary]) -> u64 {
    summaries.iter().map(|s| u64::from(s.station_count)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Observation;

    fn obs(bss: &str, channel: u32, signal: f64, ssid: &str, stations: u32) -> Observation {
        Observation {
            bss: bss.to_string(),
            ssids: vec![ssid.to_string()],
            signal_dbm: signal,
            station_count: stations,
            utilization_pct: 12.5,
            channel,
        }
    }

    #[test]
    fn test_two_band_scenario() {
        let mut tracker = PresenceTracker::new(300);
        tracker.observe(
            vec![
                obs("aa:bb:cc:dd:ee:01", 6, -45.0, "Net-A", 2),
                obs("aa:bb:cc:dd:ee:02", 6, -55.0, "Net-A-5G", 1),
            ],
            1000,
        );

        let summaries = aggregate_all(&tracker);
        assert_eq!(summaries.len(), 1);

        let summary = &summaries[0];
        assert_eq!(summary.display_bss, "aa:bb:cc:dd:ee:*");
        assert_eq!(summary.signal_dbm, -50.0);
        assert_eq!(summary.ssids, vec!["Net-A", "Net-A-5G"]);
        assert_eq!(summary.station_count, 2);
        assert_eq!(summary.channel, 6);
        assert_eq!(summary.last_seen, 1000);
    }

    #[test]
    fn test_mean_signal_is_exact() {
        let mut tracker = PresenceTracker::new(300);
        tracker.observe(
            vec![
                obs("aa:bb:cc:dd:ee:01", 6, -40.0, "A", 0),
                obs("aa:bb:cc:dd:ee:02", 6, -60.0, "A5", 0),
            ],
            1000,
        );

        let summaries = aggregate_all(&tracker);
        assert_eq!(summaries[0].signal_dbm, -50.0);
    }

    #[test]
    fn test_ssid_count_matches_member_count() {
        let mut tracker = PresenceTracker::new(300);
        tracker.observe(
            vec![
                obs("aa:bb:cc:dd:ee:01", 6, -45.0, "A", 0),
                obs("aa:bb:cc:dd:ee:02", 6, -50.0, "A", 0),
                obs("aa:bb:cc:dd:ee:03", 6, -55.0, "A", 0),
            ],
            1000,
        );
        tracker.observe(vec![obs("aa:bb:cc:dd:ee:01", 6, -45.0, "A", 0)], 1010);

        let summaries = aggregate_all(&tracker);
        assert_eq!(summaries[0].ssids.len(), 1);
    }

    #[test]
    fn test_sorted_strongest_first() {
        let mut tracker = PresenceTracker::new(300);
        tracker.observe(
            vec![
                obs("aa:bb:cc:dd:ee:01", 6, -72.0, "Weak", 1),
                obs("11:22:33:44:55:01", 1, -40.0, "Strong", 4),
                obs("66:77:88:99:aa:01", 11, -58.0, "Mid", 2),
            ],
            1000,
        );

        let summaries = aggregate_all(&tracker);
        let ssids: Vec<&str> = summaries.iter().map(|s| s.ssids[0].as_str()).collect();
        assert_eq!(ssids, vec!["Strong", "Mid", "Weak"]);
    }

    #[test]
    fn test_total_stations_sums_groups() {
        let mut tracker = PresenceTracker::new(300);
        tracker.observe(
            vec![
                obs("aa:bb:cc:dd:ee:01", 6, -45.0, "A", 2),
                obs("aa:bb:cc:dd:ee:02", 6, -55.0, "A5", 1),
                obs("11:22:33:44:55:01", 1, -40.0, "B", 4),
            ],
            1000,
        );

        let summaries = aggregate_all(&tracker);
        // First member per group counts; the second radio of A does not.
        assert_eq!(total_stations(&summaries), 6);
    }

    #[test]
    fn test_quality_thresholds() {
        assert_eq!(SignalQuality::classify(-45.0), SignalQuality::Excellent);
        assert_eq!(SignalQuality::classify(-50.0), SignalQuality::Excellent);
        assert_eq!(SignalQuality::classify(-50.01), SignalQuality::Good);
        assert_eq!(SignalQuality::classify(-60.0), SignalQuality::Good);
        assert_eq!(SignalQuality::classify(-65.0), SignalQuality::Reliable);
        assert_eq!(SignalQuality::classify(-68.0), SignalQuality::NotGood);
        assert_eq!(SignalQuality::classify(-70.0), SignalQuality::NotGood);
        assert_eq!(SignalQuality::classify(-80.0), SignalQuality::Unreliable);
    }
}
