// SPDX-License-Identifier: Apache-2.0

use crate::lifecycle::{Archive, MarkerPair};
use serde::{Deserialize, Serialize};

/// Tombstone value written into a user row's status column on delete.
pub const USER_TOMBSTONE: &str = "Deleted";

/// A joining-workflow candidate. `row_index` is the 1-based absolute row in the
/// source sheet at fetch time; it is display-only and must never be trusted for
/// a later write (see the writeback crate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Candidate {
    pub row_index: usize,
    pub timestamp: String,
    pub indent_number: String,
    pub candidate_name: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    pub joining_date: String,
    pub markers: MarkerPair,
}

/// A call-tracker lead awaiting or past its call stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lead {
    pub row_index: usize,
    pub timestamp: String,
    pub lead_number: String,
    pub indent_number: String,
    pub candidate_name: String,
    pub phone: String,
    pub post: String,
    pub source: String,
    pub markers: MarkerPair,
}

/// An offboarding record; archived via a single status column rather than a
/// marker pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeavingRecord {
    pub row_index: usize,
    pub timestamp: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub designation: String,
    pub leaving_date: String,
    pub reason: String,
    pub status: String,
}

impl LeavingRecord {
    #[must_use]
    pub fn archive(&self) -> Archive {
        Archive::from_raw(&self.status)
    }
}

/// A social-site posting. History for this domain is keyed by an externally
/// persisted id set, not by sheet columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Posting {
    pub row_index: usize,
    pub timestamp: String,
    pub posting_id: String,
    pub platform: String,
    pub title: String,
    pub content_url: String,
    pub posted_by: String,
}

/// A dashboard user account. Deletion is a tombstone in `status`, never a row
/// removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserAccount {
    pub row_index: usize,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub department: String,
    pub status: String,
}

impl UserAccount {
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case(USER_TOMBSTONE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VendorEntry {
    pub row_index: usize,
    pub timestamp: String,
    pub vendor_name: String,
    pub contact_person: String,
    pub phone: String,
    pub category: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentEntry {
    pub row_index: usize,
    pub timestamp: String,
    pub document_id: String,
    pub title: String,
    pub category: String,
    pub file_url: String,
    pub uploaded_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoEntry {
    pub row_index: usize,
    pub timestamp: String,
    pub video_id: String,
    pub title: String,
    pub url: String,
    pub category: String,
}
