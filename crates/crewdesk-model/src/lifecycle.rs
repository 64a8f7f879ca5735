// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Lifecycle bucket derived from a record's marker columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Pending,
    History,
    Neither,
}

/// Archive flag for single-marker domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archive {
    Active,
    Archived,
}

/// Status strings that mark a row as logically removed.
pub const ARCHIVE_SENTINELS: [&str; 2] = ["deleted", "yes"];

impl Archive {
    /// Trimmed, lower-cased equality against the sentinel set.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        if ARCHIVE_SENTINELS.contains(&normalized.as_str()) {
            Self::Archived
        } else {
            Self::Active
        }
    }
}

/// Two raw cell values whose joint presence/absence encodes lifecycle state.
///
/// The invariant is identical for every two-marker domain: pending iff the
/// trigger is non-empty and the completion is empty; history iff both are
/// non-empty; anything else is not yet relevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerPair {
    pub trigger: String,
    pub completion: String,
}

impl MarkerPair {
    #[must_use]
    pub fn new(trigger: impl Into<String>, completion: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            completion: completion.into(),
        }
    }

    #[must_use]
    pub fn bucket(&self) -> Bucket {
        let triggered = !self.trigger.trim().is_empty();
        let completed = !self.completion.trim().is_empty();
        match (triggered, completed) {
            (true, false) => Bucket::Pending,
            (true, true) => Bucket::History,
            _ => Bucket::Neither,
        }
    }
}
