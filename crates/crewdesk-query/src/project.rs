// SPDX-License-Identifier: Apache-2.0

use crate::header::FieldIndexMap;
use crate::schema::{
    call_tracker, documents, joining, leaving, social_site, users, vendors, videos, SheetSchema,
};
use crewdesk_model::{
    cell_text, row_is_empty, Candidate, DocumentEntry, Lead, LeavingRecord, MarkerPair, Posting,
    RawRow, UserAccount, VendorEntry, VideoEntry,
};

/// A domain record projectable from one sheet row.
///
/// Projection is total over arbitrary rows: structurally empty rows project to
/// `None`, short rows fill missing cells with empty strings, and marker
/// columns are read from the schema's absolute indices rather than header
/// resolution.
pub trait SheetRecord: Sized {
    fn schema() -> &'static SheetSchema;

    /// `row_index` is the 1-based absolute position of the row in the fetched
    /// sheet, header rows included.
    fn project(row: &RawRow, indices: &FieldIndexMap, row_index: usize) -> Option<Self>;
}

impl SheetRecord for Candidate {
    fn schema() -> &'static SheetSchema {
        &joining::SCHEMA
    }

    fn project(row: &RawRow, indices: &FieldIndexMap, row_index: usize) -> Option<Self> {
        if row_is_empty(row) {
            return None;
        }
        Some(Self {
            row_index,
            timestamp: indices.text(row, joining::TIMESTAMP),
            indent_number: indices.text(row, joining::INDENT_NUMBER),
            candidate_name: indices.text(row, joining::CANDIDATE_NAME),
            phone: indices.text(row, joining::PHONE),
            department: indices.text(row, joining::DEPARTMENT),
            designation: indices.text(row, joining::DESIGNATION),
            joining_date: indices.text(row, joining::JOINING_DATE),
            markers: MarkerPair::new(
                cell_text(row, joining::PLANNED_COL),
                cell_text(row, joining::COMPLETED_COL),
            ),
        })
    }
}

impl SheetRecord for Lead {
    fn schema() -> &'static SheetSchema {
        &call_tracker::SCHEMA
    }

    fn project(row: &RawRow, indices: &FieldIndexMap, row_index: usize) -> Option<Self> {
        if row_is_empty(row) {
            return None;
        }
        Some(Self {
            row_index,
            timestamp: indices.text(row, call_tracker::TIMESTAMP),
            lead_number: indices.text(row, call_tracker::LEAD_NUMBER),
            indent_number: indices.text(row, call_tracker::INDENT_NUMBER),
            candidate_name: indices.text(row, call_tracker::CANDIDATE_NAME),
            phone: indices.text(row, call_tracker::PHONE),
            post: indices.text(row, call_tracker::POST),
            source: indices.text(row, call_tracker::SOURCE),
            markers: MarkerPair::new(
                cell_text(row, call_tracker::CALL_PLANNED_COL),
                cell_text(row, call_tracker::CALL_DONE_COL),
            ),
        })
    }
}

impl SheetRecord for LeavingRecord {
    fn schema() -> &'static SheetSchema {
        &leaving::SCHEMA
    }

    fn project(row: &RawRow, indices: &FieldIndexMap, row_index: usize) -> Option<Self> {
        if row_is_empty(row) {
            return None;
        }
        Some(Self {
            row_index,
            timestamp: indices.text(row, leaving::TIMESTAMP),
            employee_id: indices.text(row, leaving::EMPLOYEE_ID),
            employee_name: indices.text(row, leaving::EMPLOYEE_NAME),
            department: indices.text(row, leaving::DEPARTMENT),
            designation: indices.text(row, leaving::DESIGNATION),
            leaving_date: indices.text(row, leaving::LEAVING_DATE),
            reason: indices.text(row, leaving::REASON),
            status: cell_text(row, leaving::STATUS_COL),
        })
    }
}

impl SheetRecord for Posting {
    fn schema() -> &'static SheetSchema {
        &social_site::SCHEMA
    }

    fn project(row: &RawRow, indices: &FieldIndexMap, row_index: usize) -> Option<Self> {
        if row_is_empty(row) {
            return None;
        }
        Some(Self {
            row_index,
            timestamp: indices.text(row, social_site::TIMESTAMP),
            posting_id: indices.text(row, social_site::POSTING_ID),
            platform: indices.text(row, social_site::PLATFORM),
            title: indices.text(row, social_site::TITLE),
            content_url: indices.text(row, social_site::CONTENT_URL),
            posted_by: indices.text(row, social_site::POSTED_BY),
        })
    }
}

impl SheetRecord for UserAccount {
    fn schema() -> &'static SheetSchema {
        &users::SCHEMA
    }

    fn project(row: &RawRow, indices: &FieldIndexMap, row_index: usize) -> Option<Self> {
        if row_is_empty(row) {
            return None;
        }
        Some(Self {
            row_index,
            username: indices.text(row, users::USERNAME),
            full_name: indices.text(row, users::FULL_NAME),
            role: indices.text(row, users::ROLE),
            department: indices.text(row, users::DEPARTMENT),
            status: cell_text(row, users::STATUS_COL),
        })
    }
}

impl SheetRecord for VendorEntry {
    fn schema() -> &'static SheetSchema {
        &vendors::SCHEMA
    }

    fn project(row: &RawRow, indices: &FieldIndexMap, row_index: usize) -> Option<Self> {
        if row_is_empty(row) {
            return None;
        }
        Some(Self {
            row_index,
            timestamp: indices.text(row, vendors::TIMESTAMP),
            vendor_name: indices.text(row, vendors::VENDOR_NAME),
            contact_person: indices.text(row, vendors::CONTACT_PERSON),
            phone: indices.text(row, vendors::PHONE),
            category: indices.text(row, vendors::CATEGORY),
            address: indices.text(row, vendors::ADDRESS),
        })
    }
}

impl SheetRecord for DocumentEntry {
    fn schema() -> &'static SheetSchema {
        &documents::SCHEMA
    }

    fn project(row: &RawRow, indices: &FieldIndexMap, row_index: usize) -> Option<Self> {
        if row_is_empty(row) {
            return None;
        }
        Some(Self {
            row_index,
            timestamp: indices.text(row, documents::TIMESTAMP),
            document_id: indices.text(row, documents::DOCUMENT_ID),
            title: indices.text(row, documents::TITLE),
            category: indices.text(row, documents::CATEGORY),
            file_url: indices.text(row, documents::FILE_URL),
            uploaded_by: indices.text(row, documents::UPLOADED_BY),
        })
    }
}

impl SheetRecord for VideoEntry {
    fn schema() -> &'static SheetSchema {
        &videos::SCHEMA
    }

    fn project(row: &RawRow, indices: &FieldIndexMap, row_index: usize) -> Option<Self> {
        if row_is_empty(row) {
            return None;
        }
        Some(Self {
            row_index,
            timestamp: indices.text(row, videos::TIMESTAMP),
            video_id: indices.text(row, videos::VIDEO_ID),
            title: indices.text(row, videos::TITLE),
            url: indices.text(row, videos::URL),
            category: indices.text(row, videos::CATEGORY),
        })
    }
}
