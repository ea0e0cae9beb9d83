//! JSON-formatted output: one compact document per cycle.

use serde_json::json;

use ap_census_core::{ApKey, CycleRecord};

use super::OutputFormatter;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_cycle(&self, record: &CycleRecord, evicted: &[ApKey], _ttl_secs: i64) -> String {
        let output = json!({
            "ts": record.ts,
            "totalDevs": record.total_devs,
            "count": record.aps.len(),
            "aps": record.aps,
            "evicted": evicted.iter().map(|k| k.to_string()).collect::<Vec<_>>(),
        });
        serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_with_legacy_fields() {
        let record = CycleRecord {
            ts: 1000,
            total_devs: 2,
            aps: vec![],
        };
        let evicted = vec![ApKey::new("aa:bb:cc:dd:ee:01", 6)];

        let rendered = JsonOutput::new().format_cycle(&record, &evicted, 300);
        assert!(!rendered.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["totalDevs"], 2);
        assert_eq!(value["evicted"][0], "aa:bb:cc:dd:ee:*-6");
    }
}
