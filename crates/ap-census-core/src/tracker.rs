//! Presence tracking for logical access points.
//!
//! Per key, the state machine is: absent -> present (fresh) -> present
//! (stale but within TTL) -> evicted. A key that misses one scan keeps
//! its group; scans legitimately drop APs for a cycle under RF noise.

use std::collections::HashMap;

use crate::key::ApKey;
use crate::types::Observation;

/// Maximum allowed silence before a tracked key is considered gone.
pub const DEFAULT_TTL_SECS: i64 = 300;

/// Time-windowed state for one logical key.
#[derive(Debug, Clone)]
pub struct Group {
    /// Observations from the most recent cycle that matched this key.
    /// Never empty by construction.
    pub members: Vec<Observation>,
    /// Epoch seconds of the most recent cycle that observed this key.
    pub last_seen: i64,
}

/// Tracks logical AP presence over a sliding TTL window.
///
/// An owned state object, constructed per instance so tests and the cycle
/// driver can hold isolated trackers. Pure state transitions over
/// in-memory structures; performs no I/O and cannot fail.
#[derive(Debug)]
pub struct PresenceTracker {
    groups: HashMap<ApKey, Group>,
    ttl_secs: i64,
}

impl PresenceTracker {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            groups: HashMap::new(),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Fold one scan cycle's observations into the table.
    ///
    /// Keys seen this cycle have their member set replaced wholesale (a
    /// cycle is a fresh snapshot, not a running history) and `last_seen`
    /// bumped to `now`; multiple observations sharing a key within the
    /// cycle land in the same group. Keys absent this cycle are left
    /// untouched. The final sweep removes every group unseen for longer
    /// than the TTL and returns the evicted keys so the caller can report
    /// them.
    ///
    /// Afterwards the table holds exactly the keys seen within the last
    /// TTL seconds, each mapped to its most recently observed members.
    pub fn observe(&mut self, observations: Vec<Observation>, now: i64) -> Vec<ApKey> {
        let mut cycle: HashMap<ApKey, Vec<Observation>> = HashMap::new();
        for obs in observations {
            cycle.entry(ApKey::derive(&obs)).or_default().push(obs);
        }

        for (key, members) in cycle {
            self.groups.insert(key, Group { members, last_seen: now });
        }

        let mut evicted: Vec<ApKey> = self
            .groups
            .iter()
            .filter(|(_, group)| now - group.last_seen > self.ttl_secs)
            .map(|(key, _)| key.clone())
            .collect();
        evicted.sort_by(|a, b| (&a.prefix, a.channel).cmp(&(&b.prefix, b.channel)));

        for key in &evicted {
            self.groups.remove(key);
        }

        evicted
    }

    /// Live groups, in arbitrary order.
    pub fn groups(&self) -> impl Iterator<Item = (&ApKey, &Group)> {
        self.groups.iter()
    }

    pub fn get(&self, key: &ApKey) -> Option<&Group> {
        self.groups.get(key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
