// SPDX-License-Identifier: Apache-2.0

//! Column tables for every registry sheet.
//!
//! Display/identity fields are header-resolved with the defaults below;
//! lifecycle marker columns use raw absolute indices and are never
//! header-resolved. Pages historically disagree about some offsets for the
//! same logical field (see `call_tracker::INDENT_NUMBER` vs
//! `joining::INDENT_NUMBER`); those per-page assumptions are preserved, not
//! unified.

use crate::header::FieldSpec;

/// Static description of one sheet: where the header sits, where data begins,
/// and which logical fields the page reads through header resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSchema {
    pub sheet: &'static str,
    /// Row carrying header names, when the sheet has one.
    pub header_row: Option<usize>,
    /// First data row; everything before it is sliced off.
    pub data_start: usize,
    pub fields: &'static [FieldSpec],
    /// Contiguous width of a composed full-row write.
    pub row_width: usize,
}

pub mod joining {
    use super::{FieldSpec, SheetSchema};

    pub const SHEET: &str = "JOINING";
    pub const STEP_SUBMIT: &str = "J-1";

    pub const TIMESTAMP: &str = "Timestamp";
    pub const INDENT_NUMBER: &str = "Indent Number";
    pub const CANDIDATE_NAME: &str = "Candidate Name";
    pub const PHONE: &str = "Phone";
    pub const DEPARTMENT: &str = "Department";
    pub const DESIGNATION: &str = "Designation";
    pub const JOINING_DATE: &str = "Joining Date";

    pub const FIELDS: [FieldSpec; 7] = [
        FieldSpec::new(TIMESTAMP, 0),
        FieldSpec::new(INDENT_NUMBER, 1),
        FieldSpec::new(CANDIDATE_NAME, 2),
        FieldSpec::new(PHONE, 3),
        FieldSpec::new(DEPARTMENT, 4),
        FieldSpec::new(DESIGNATION, 5),
        FieldSpec::new(JOINING_DATE, 6),
    ];

    /// Slots written by the checklist submission.
    pub const STEP_COL: usize = 7;
    pub const CHECKLIST_COL: usize = 8;
    pub const REMARKS_COL: usize = 9;

    /// Marker pair: formality planned / formality completed.
    pub const PLANNED_COL: usize = 16;
    pub const COMPLETED_COL: usize = 17;

    pub const SCHEMA: SheetSchema = SheetSchema {
        sheet: SHEET,
        header_row: Some(0),
        data_start: 1,
        fields: &FIELDS,
        row_width: 18,
    };
}

pub mod call_tracker {
    use super::{FieldSpec, SheetSchema};

    pub const SHEET: &str = "CALL TRACKER";
    pub const STEP_CALL: &str = "CT-1";

    pub const TIMESTAMP: &str = "Timestamp";
    pub const LEAD_NUMBER: &str = "Lead Number";
    // This page assumes column 2; the joining page puts the same logical field
    // at column 1. Organic drift in the backing sheets, kept per page.
    pub const INDENT_NUMBER: &str = "Indent Number";
    pub const CANDIDATE_NAME: &str = "Candidate Name";
    pub const PHONE: &str = "Phone";
    pub const POST: &str = "Post";
    pub const SOURCE: &str = "Source";

    pub const FIELDS: [FieldSpec; 7] = [
        FieldSpec::new(TIMESTAMP, 0),
        FieldSpec::new(LEAD_NUMBER, 1),
        FieldSpec::new(INDENT_NUMBER, 2),
        FieldSpec::new(CANDIDATE_NAME, 3),
        FieldSpec::new(PHONE, 4),
        FieldSpec::new(POST, 5),
        FieldSpec::new(SOURCE, 6),
    ];

    /// Step tag slot stamped on intake writes.
    pub const STEP_COL: usize = 7;
    /// Remarks captured when the call outcome lands.
    pub const REMARKS_COL: usize = 8;

    pub const CALL_PLANNED_COL: usize = 10;
    pub const CALL_DONE_COL: usize = 11;

    /// The tracker sheet carries a banner row under its header, so data starts
    /// one row later than on the other sheets.
    pub const SCHEMA: SheetSchema = SheetSchema {
        sheet: SHEET,
        header_row: Some(0),
        data_start: 2,
        fields: &FIELDS,
        row_width: 12,
    };
}

pub mod leaving {
    use super::{FieldSpec, SheetSchema};

    pub const SHEET: &str = "LEAVING";
    pub const STEP_CLOSE: &str = "L-1";

    pub const TIMESTAMP: &str = "Timestamp";
    pub const EMPLOYEE_ID: &str = "Employee Id";
    pub const EMPLOYEE_NAME: &str = "Employee Name";
    pub const DEPARTMENT: &str = "Department";
    pub const DESIGNATION: &str = "Designation";
    pub const LEAVING_DATE: &str = "Leaving Date";
    pub const REASON: &str = "Reason";

    pub const FIELDS: [FieldSpec; 7] = [
        FieldSpec::new(TIMESTAMP, 0),
        FieldSpec::new(EMPLOYEE_ID, 1),
        FieldSpec::new(EMPLOYEE_NAME, 2),
        FieldSpec::new(DEPARTMENT, 3),
        FieldSpec::new(DESIGNATION, 4),
        FieldSpec::new(LEAVING_DATE, 5),
        FieldSpec::new(REASON, 6),
    ];

    /// Single-marker archive flag, sentinel-matched.
    pub const STATUS_COL: usize = 12;

    pub const SCHEMA: SheetSchema = SheetSchema {
        sheet: SHEET,
        header_row: Some(0),
        data_start: 1,
        fields: &FIELDS,
        row_width: 13,
    };
}

pub mod social_site {
    use super::{FieldSpec, SheetSchema};

    pub const SHEET: &str = "SOCIAL SITE";
    pub const STEP_POST: &str = "SS-1";

    pub const TIMESTAMP: &str = "Timestamp";
    pub const POSTING_ID: &str = "Posting Id";
    pub const PLATFORM: &str = "Platform";
    pub const TITLE: &str = "Title";
    pub const CONTENT_URL: &str = "Content URL";
    pub const POSTED_BY: &str = "Posted By";

    pub const FIELDS: [FieldSpec; 6] = [
        FieldSpec::new(TIMESTAMP, 0),
        FieldSpec::new(POSTING_ID, 1),
        FieldSpec::new(PLATFORM, 2),
        FieldSpec::new(TITLE, 3),
        FieldSpec::new(CONTENT_URL, 4),
        FieldSpec::new(POSTED_BY, 5),
    ];

    pub const SCHEMA: SheetSchema = SheetSchema {
        sheet: SHEET,
        header_row: Some(0),
        data_start: 1,
        fields: &FIELDS,
        row_width: 6,
    };
}

pub mod users {
    use super::{FieldSpec, SheetSchema};

    pub const SHEET: &str = "USERS";
    pub const STEP_MANAGE: &str = "U-1";

    pub const USERNAME: &str = "Username";
    pub const FULL_NAME: &str = "Full Name";
    pub const ROLE: &str = "Role";
    pub const DEPARTMENT: &str = "Department";

    pub const FIELDS: [FieldSpec; 4] = [
        FieldSpec::new(USERNAME, 0),
        FieldSpec::new(FULL_NAME, 1),
        FieldSpec::new(ROLE, 2),
        FieldSpec::new(DEPARTMENT, 3),
    ];

    /// Tombstone column; `Deleted` here removes the account from every view.
    pub const STATUS_COL: usize = 7;

    /// The users sheet is headerless; defaults are the only resolution.
    pub const SCHEMA: SheetSchema = SheetSchema {
        sheet: SHEET,
        header_row: None,
        data_start: 0,
        fields: &FIELDS,
        row_width: 8,
    };
}

pub mod vendors {
    use super::{FieldSpec, SheetSchema};

    pub const SHEET: &str = "VENDORS";
    pub const STEP_REGISTER: &str = "V-1";

    pub const TIMESTAMP: &str = "Timestamp";
    pub const VENDOR_NAME: &str = "Vendor Name";
    pub const CONTACT_PERSON: &str = "Contact Person";
    pub const PHONE: &str = "Phone";
    pub const CATEGORY: &str = "Category";
    pub const ADDRESS: &str = "Address";

    pub const FIELDS: [FieldSpec; 6] = [
        FieldSpec::new(TIMESTAMP, 0),
        FieldSpec::new(VENDOR_NAME, 1),
        FieldSpec::new(CONTACT_PERSON, 2),
        FieldSpec::new(PHONE, 3),
        FieldSpec::new(CATEGORY, 4),
        FieldSpec::new(ADDRESS, 5),
    ];

    pub const SCHEMA: SheetSchema = SheetSchema {
        sheet: SHEET,
        header_row: Some(0),
        data_start: 1,
        fields: &FIELDS,
        row_width: 6,
    };
}

pub mod documents {
    use super::{FieldSpec, SheetSchema};

    pub const SHEET: &str = "DOCUMENTS";
    pub const STEP_UPLOAD: &str = "D-1";

    pub const TIMESTAMP: &str = "Timestamp";
    pub const DOCUMENT_ID: &str = "Document Id";
    pub const TITLE: &str = "Title";
    pub const CATEGORY: &str = "Category";
    pub const FILE_URL: &str = "File URL";
    pub const UPLOADED_BY: &str = "Uploaded By";

    pub const FIELDS: [FieldSpec; 6] = [
        FieldSpec::new(TIMESTAMP, 0),
        FieldSpec::new(DOCUMENT_ID, 1),
        FieldSpec::new(TITLE, 2),
        FieldSpec::new(CATEGORY, 3),
        FieldSpec::new(FILE_URL, 4),
        FieldSpec::new(UPLOADED_BY, 5),
    ];

    pub const SCHEMA: SheetSchema = SheetSchema {
        sheet: SHEET,
        header_row: Some(0),
        data_start: 1,
        fields: &FIELDS,
        row_width: 6,
    };
}

pub mod videos {
    use super::{FieldSpec, SheetSchema};

    pub const SHEET: &str = "VIDEOS";
    pub const STEP_PUBLISH: &str = "VID-1";

    pub const TIMESTAMP: &str = "Timestamp";
    pub const VIDEO_ID: &str = "Video Id";
    pub const TITLE: &str = "Title";
    pub const URL: &str = "URL";
    pub const CATEGORY: &str = "Category";

    pub const FIELDS: [FieldSpec; 5] = [
        FieldSpec::new(TIMESTAMP, 0),
        FieldSpec::new(VIDEO_ID, 1),
        FieldSpec::new(TITLE, 2),
        FieldSpec::new(URL, 3),
        FieldSpec::new(CATEGORY, 4),
    ];

    pub const SCHEMA: SheetSchema = SheetSchema {
        sheet: SHEET,
        header_row: Some(0),
        data_start: 1,
        fields: &FIELDS,
        row_width: 5,
    };
}
