// SPDX-License-Identifier: Apache-2.0

use crate::classify::{Classified, ClassifiedPosting, Tab};
use crewdesk_model::{Candidate, DocumentEntry, Lead, LeavingRecord, UserAccount, VendorEntry, VideoEntry};
use std::collections::BTreeMap;

/// Inputs of the view's working-set reduction. Category values are exact,
/// case-sensitive matches; the search term is a case-insensitive substring
/// probe over the domain's searchable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub tab: Tab,
    pub search: String,
    pub categories: BTreeMap<String, String>,
}

impl FilterParams {
    #[must_use]
    pub fn tab(tab: Tab) -> Self {
        Self {
            tab,
            search: String::new(),
            categories: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.categories.insert(name.into(), value.into());
        self
    }
}

/// Record surface the reducer filters on.
pub trait Searchable {
    /// Text attributes probed by the free-text search.
    fn search_fields(&self) -> Vec<&str>;
    /// Categorical attribute by filter name; `None` means the record does not
    /// carry that category and cannot match a non-empty filter on it.
    fn category(&self, name: &str) -> Option<&str>;
}

/// Apply tab, category, and search filters in that order. Stable: input order
/// is preserved, and identical inputs always produce identical output.
#[must_use]
pub fn apply<R>(records: &[R], params: &FilterParams) -> Vec<R>
where
    R: Classified + Searchable + Clone,
{
    let search = params.search.trim().to_lowercase();
    records
        .iter()
        .filter(|record| params.tab.admits(record.bucket()))
        .filter(|record| {
            params.categories.iter().all(|(name, wanted)| {
                wanted.is_empty() || record.category(name) == Some(wanted.as_str())
            })
        })
        .filter(|record| {
            if search.is_empty() {
                return true;
            }
            record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&search))
        })
        .cloned()
        .collect()
}

impl Searchable for Candidate {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.indent_number,
            &self.candidate_name,
            &self.phone,
            &self.department,
            &self.designation,
        ]
    }

    fn category(&self, name: &str) -> Option<&str> {
        match name {
            "department" => Some(&self.department),
            "designation" => Some(&self.designation),
            _ => None,
        }
    }
}

impl Searchable for Lead {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.lead_number,
            &self.indent_number,
            &self.candidate_name,
            &self.phone,
            &self.post,
        ]
    }

    fn category(&self, name: &str) -> Option<&str> {
        match name {
            "post" => Some(&self.post),
            "source" => Some(&self.source),
            _ => None,
        }
    }
}

impl Searchable for LeavingRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.employee_id,
            &self.employee_name,
            &self.department,
            &self.reason,
        ]
    }

    fn category(&self, name: &str) -> Option<&str> {
        match name {
            "department" => Some(&self.department),
            "designation" => Some(&self.designation),
            _ => None,
        }
    }
}

impl Searchable for ClassifiedPosting {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.posting.posting_id,
            &self.posting.platform,
            &self.posting.title,
            &self.posting.posted_by,
        ]
    }

    fn category(&self, name: &str) -> Option<&str> {
        match name {
            "platform" => Some(&self.posting.platform),
            _ => None,
        }
    }
}

impl Searchable for UserAccount {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.username, &self.full_name, &self.role, &self.department]
    }

    fn category(&self, name: &str) -> Option<&str> {
        match name {
            "role" => Some(&self.role),
            "department" => Some(&self.department),
            _ => None,
        }
    }
}

impl Searchable for VendorEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.vendor_name,
            &self.contact_person,
            &self.phone,
            &self.category,
        ]
    }

    fn category(&self, name: &str) -> Option<&str> {
        match name {
            "category" => Some(&self.category),
            _ => None,
        }
    }
}

impl Searchable for DocumentEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.document_id, &self.title, &self.category, &self.uploaded_by]
    }

    fn category(&self, name: &str) -> Option<&str> {
        match name {
            "category" => Some(&self.category),
            _ => None,
        }
    }
}

impl Searchable for VideoEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.video_id, &self.title, &self.category]
    }

    fn category(&self, name: &str) -> Option<&str> {
        match name {
            "category" => Some(&self.category),
            _ => None,
        }
    }
}
