//! Logical access point identity keys.

use std::fmt;

use crate::types::Observation;

/// Grouping key that identifies a physical access point across its
/// per-band radios.
///
/// Multi-radio APs conventionally increment the low byte of the BSS
/// address per radio, so the key drops the final octet and pairs the
/// remaining prefix with the primary channel. Structured rather than a
/// formatted string so equality never depends on numeric field widths.
///
/// This is a heuristic, not a cryptographic identity: non-sequential
/// vendor addressing under-merges, and two distinct APs sharing
/// prefix+channel over-merge. Accepted tradeoff for this domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApKey {
    /// BSS address minus its last two hex characters, trailing `:` kept.
    pub prefix: String,
    /// Primary channel number.
    pub channel: u32,
}

impl ApKey {
    /// Derive the key for one observation.
    ///
    /// Pure function of `(bss, channel)`. Assumes the well-formed
    /// fixed-width addresses the parser produces.
    pub fn derive(obs: &Observation) -> Self {
        Self::new(&obs.bss, obs.channel)
    }

    pub fn new(bss: &str, channel: u32) -> Self {
        let cut = bss.len().saturating_sub(2);
        Self {
            prefix: bss[..cut].to_string(),
            channel,
        }
    }

    /// Human-meaningful identity: prefix plus a wildcard for the
    /// collapsed low octet.
    pub fn display_bss(&self) -> String {
        format!("{}*", self.prefix)
    }
}

impl fmt::Display for ApKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*-{}", self.prefix, self.channel)
    }
}
