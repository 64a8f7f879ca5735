// SPDX-License-Identifier: Apache-2.0

use crewdesk_model::{Archive, Bucket, Candidate, Lead, LeavingRecord, Posting, UserAccount};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// View tab selecting a lifecycle slice. `All` means every classified record,
/// i.e. pending plus history; rows in neither bucket stay invisible on every
/// tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Pending,
    History,
    All,
}

impl Tab {
    #[must_use]
    pub fn admits(self, bucket: Bucket) -> bool {
        match self {
            Self::Pending => bucket == Bucket::Pending,
            Self::History => bucket == Bucket::History,
            Self::All => bucket != Bucket::Neither,
        }
    }
}

/// A record the classifier can bucket on its own fields.
pub trait Classified {
    fn bucket(&self) -> Bucket;
}

impl Classified for Candidate {
    fn bucket(&self) -> Bucket {
        self.markers.bucket()
    }
}

impl Classified for Lead {
    fn bucket(&self) -> Bucket {
        self.markers.bucket()
    }
}

impl Classified for LeavingRecord {
    fn bucket(&self) -> Bucket {
        match self.archive() {
            Archive::Active => Bucket::Pending,
            Archive::Archived => Bucket::History,
        }
    }
}

impl Classified for UserAccount {
    fn bucket(&self) -> Bucket {
        if self.is_deleted() {
            Bucket::Neither
        } else {
            Bucket::Pending
        }
    }
}

// Registry domains carry no lifecycle markers; every projected row is live.
impl Classified for crewdesk_model::VendorEntry {
    fn bucket(&self) -> Bucket {
        Bucket::Pending
    }
}

impl Classified for crewdesk_model::DocumentEntry {
    fn bucket(&self) -> Bucket {
        Bucket::Pending
    }
}

impl Classified for crewdesk_model::VideoEntry {
    fn bucket(&self) -> Bucket {
        Bucket::Pending
    }
}

/// A posting joined with the externally persisted history-membership set.
/// Membership is mutated by an explicit user action and persists across
/// reloads independent of the sheet's own data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPosting {
    pub posting: Posting,
    pub bucket: Bucket,
}

impl Classified for ClassifiedPosting {
    fn bucket(&self) -> Bucket {
        self.bucket
    }
}

/// Join postings against the membership set: members are history, the rest
/// pending.
#[must_use]
pub fn classify_postings(postings: Vec<Posting>, history_ids: &BTreeSet<String>) -> Vec<ClassifiedPosting> {
    postings
        .into_iter()
        .map(|posting| {
            let bucket = if history_ids.contains(&posting.posting_id) {
                Bucket::History
            } else {
                Bucket::Pending
            };
            ClassifiedPosting { posting, bucket }
        })
        .collect()
}
