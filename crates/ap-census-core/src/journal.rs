//! Append-only cycle journal.
//!
//! One JSON record per line (NDJSON), so the file is valid after every
//! append and needs no closing-bracket repair. `read_all` still accepts
//! the legacy single-array capture format with its trailing comma, so old
//! files remain sample-able.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::StorageError;
use crate::types::ApSummary;

/// Everything persisted for one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// Cycle timestamp, epoch seconds.
    pub ts: i64,
    /// Device-count estimate: sum of station counts over all logical APs.
    #[serde(rename = "totalDevs")]
    pub total_devs: u64,
    /// Aggregated summaries, strongest signal first.
    pub aps: Vec<ApSummary>,
}

/// Append-only journal of cycle records.
pub struct CycleJournal {
    path: PathBuf,
}

impl CycleJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a single line. Creates the file on first use.
    pub async fn append(&self, record: &CycleRecord) -> Result<(), StorageError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// Read every record from a journal file.
    ///
    /// Detects the legacy array capture (`[{...},{...},`) by its leading
    /// bracket and repairs the trailing comma before parsing; anything
    /// else is treated as NDJSON.
    pub async fn read_all(path: impl AsRef<Path>) -> Result<Vec<CycleRecord>, StorageError> {
        let content = tokio::fs::read_to_string(path).await?;
        let trimmed = content.trim();

        if trimmed.starts_with('[') {
            return parse_legacy_array(trimmed);
        }

        let mut records = Vec::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record =
                serde_json::from_str(line).map_err(|e| StorageError::Malformed {
                    line: index + 1,
                    message: e.to_string(),
                })?;
            records.push(record);
        }
        Ok(records)
    }
}

fn parse_legacy_array(content: &str) -> Result<Vec<CycleRecord>, StorageError> {
    let body = content
        .trim_end_matches(']')
        .trim_end()
        .trim_end_matches(',');
    let repaired = format!("{}]", body);

    serde_json::from_str(&repaired).map_err(|e| StorageError::Malformed {
        line: 1,
        message: format!("legacy array capture: {}", e),
    })
}
