// SPDX-License-Identifier: Apache-2.0

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDateTime;
use crewdesk_model::{
    pad_row, parse_sheet_name, parse_step_code, validate_phone, Candidate, Lead, LeavingRecord,
    MutationOp, MutationRequest, StepCode, TimestampFormat, UserAccount, ValidationError,
    CHECKLIST_SEPARATOR, USER_TOMBSTONE,
};
use crewdesk_query::schema::{call_tracker, documents, joining, leaving, users, vendors};
use crewdesk_store::{SheetError, SheetErrorCode};

/// Largest accepted upload payload.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Accepted upload content types.
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["application/pdf", "image/png", "image/jpeg"];

fn validation(err: ValidationError) -> SheetError {
    SheetError::new(SheetErrorCode::Validation, err.to_string())
}

fn sheet(name: &'static str) -> Result<crewdesk_model::SheetName, SheetError> {
    parse_sheet_name(name).map_err(|err| SheetError::new(SheetErrorCode::Internal, err.to_string()))
}

/// Wire row/column addresses are 1-based; schema columns are 0-based.
const fn wire_column(col: usize) -> usize {
    col + 1
}

fn step(tag: &'static str) -> Result<StepCode, SheetError> {
    parse_step_code(tag).map_err(|err| SheetError::new(SheetErrorCode::Internal, err.to_string()))
}

/// Join checklist labels into the single cell value the sheet expects.
#[must_use]
pub fn join_checklist<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(CHECKLIST_SEPARATOR)
}

/// Form input of a new call-tracker lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    pub lead_number: String,
    pub indent_number: String,
    pub candidate_name: String,
    pub phone: String,
    pub post: String,
    pub source: String,
}

/// Compose the intake row for a new lead. The call-planned marker is stamped
/// with `now` so the lead lands on the pending tab; phone validation runs
/// before anything touches the network.
pub fn compose_lead_intake(form: &LeadForm, now: NaiveDateTime) -> Result<MutationRequest, SheetError> {
    Ok(MutationRequest::new(
        sheet(call_tracker::SHEET)?,
        MutationOp::InsertRow(lead_row(form, now)?),
    ))
}

/// One batched write for a whole list of leads, e.g. an import from the old
/// register. Validation is all-or-nothing: a single bad form rejects the
/// batch before any network traffic.
pub fn compose_lead_bulk_import(
    forms: &[LeadForm],
    now: NaiveDateTime,
) -> Result<MutationRequest, SheetError> {
    if forms.is_empty() {
        return Err(SheetError::new(
            SheetErrorCode::Validation,
            "bulk import needs at least one lead",
        ));
    }
    let rows = forms
        .iter()
        .map(|form| lead_row(form, now))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MutationRequest::new(
        sheet(call_tracker::SHEET)?,
        MutationOp::BulkInsert(rows),
    ))
}

fn lead_row(form: &LeadForm, now: NaiveDateTime) -> Result<Vec<String>, SheetError> {
    if form.candidate_name.trim().is_empty() {
        return Err(SheetError::new(
            SheetErrorCode::Validation,
            "candidate name is required",
        ));
    }
    let phone = validate_phone(&form.phone).map_err(validation)?;
    let stamp = TimestampFormat::UsSlash.render(now);

    let mut row = pad_row(Vec::new(), call_tracker::SCHEMA.row_width);
    row[0] = stamp.clone();
    row[1] = form.lead_number.trim().to_string();
    row[2] = form.indent_number.trim().to_string();
    row[3] = form.candidate_name.trim().to_string();
    row[4] = phone;
    row[5] = form.post.trim().to_string();
    row[6] = form.source.trim().to_string();
    row[call_tracker::STEP_COL] = step(call_tracker::STEP_CALL)?.as_str().to_string();
    row[call_tracker::CALL_PLANNED_COL] = stamp;
    Ok(row)
}

/// Patch the call-done marker cell for a lead resolved at `row_index`.
pub fn compose_call_outcome(
    _lead: &Lead,
    row_index: usize,
    now: NaiveDateTime,
) -> Result<MutationRequest, SheetError> {
    Ok(MutationRequest::new(
        sheet(call_tracker::SHEET)?,
        MutationOp::UpdateCell {
            row_index,
            column_index: wire_column(call_tracker::CALL_DONE_COL),
            value: TimestampFormat::UsSlash.render(now),
        },
    ))
}

/// Checklist form submitted when a candidate's joining formalities complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistSubmission {
    pub items: Vec<String>,
    pub remarks: String,
}

/// Full-row rewrite completing a candidate's joining step: display fields are
/// carried over, the checklist collapses into one cell, and the completion
/// marker gets the zero-padded timestamp that flips the record to history.
pub fn compose_joining_completion(
    candidate: &Candidate,
    row_index: usize,
    submission: &ChecklistSubmission,
    now: NaiveDateTime,
) -> Result<MutationRequest, SheetError> {
    if submission.items.is_empty() {
        return Err(SheetError::new(
            SheetErrorCode::Validation,
            "checklist must have at least one completed item",
        ));
    }

    let mut row = pad_row(Vec::new(), joining::SCHEMA.row_width);
    row[0] = candidate.timestamp.clone();
    row[1] = candidate.indent_number.clone();
    row[2] = candidate.candidate_name.clone();
    row[3] = candidate.phone.clone();
    row[4] = candidate.department.clone();
    row[5] = candidate.designation.clone();
    row[6] = candidate.joining_date.clone();
    row[joining::STEP_COL] = step(joining::STEP_SUBMIT)?.as_str().to_string();
    row[joining::CHECKLIST_COL] = join_checklist(&submission.items);
    row[joining::REMARKS_COL] = submission.remarks.trim().to_string();
    row[joining::PLANNED_COL] = candidate.markers.trigger.clone();
    row[joining::COMPLETED_COL] = TimestampFormat::IsoSeconds.render(now);

    Ok(MutationRequest::new(
        sheet(joining::SHEET)?,
        MutationOp::UpdateRow { row_index, row },
    ))
}

/// Archive a leaving record by patching its status column to a sentinel.
pub fn compose_leaving_archive(
    _record: &LeavingRecord,
    row_index: usize,
) -> Result<MutationRequest, SheetError> {
    Ok(MutationRequest::new(
        sheet(leaving::SHEET)?,
        MutationOp::UpdateCell {
            row_index,
            column_index: wire_column(leaving::STATUS_COL),
            value: "Yes".to_string(),
        },
    ))
}

/// Form input of a new vendor registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorForm {
    pub vendor_name: String,
    pub contact_person: String,
    pub phone: String,
    pub category: String,
    pub address: String,
}

pub fn compose_vendor_entry(form: &VendorForm, now: NaiveDateTime) -> Result<MutationRequest, SheetError> {
    if form.vendor_name.trim().is_empty() {
        return Err(SheetError::new(
            SheetErrorCode::Validation,
            "vendor name is required",
        ));
    }
    let phone = validate_phone(&form.phone).map_err(validation)?;

    let mut row = pad_row(Vec::new(), vendors::SCHEMA.row_width);
    row[0] = TimestampFormat::UsSlash.render(now);
    row[1] = form.vendor_name.trim().to_string();
    row[2] = form.contact_person.trim().to_string();
    row[3] = phone;
    row[4] = form.category.trim().to_string();
    row[5] = form.address.trim().to_string();

    Ok(MutationRequest::new(
        sheet(vendors::SHEET)?,
        MutationOp::InsertRow(row),
    ))
}

/// Soft delete: rewrite the user's row with every display field preserved and
/// only the tombstone column set. The row itself is never removed.
pub fn compose_user_tombstone(
    user: &UserAccount,
    row_index: usize,
) -> Result<MutationRequest, SheetError> {
    let mut row = pad_row(Vec::new(), users::SCHEMA.row_width);
    row[0] = user.username.clone();
    row[1] = user.full_name.clone();
    row[2] = user.role.clone();
    row[3] = user.department.clone();
    row[users::STATUS_COL] = USER_TOMBSTONE.to_string();

    Ok(MutationRequest::new(
        sheet(users::SHEET)?,
        MutationOp::UpdateRow { row_index, row },
    ))
}

/// Validate and encode an upload payload. Size and content type are checked
/// before encoding; the folder id comes from service configuration.
pub fn compose_file_upload(
    file_name: &str,
    mime_type: &str,
    bytes: &[u8],
    folder_id: &str,
) -> Result<MutationRequest, SheetError> {
    if file_name.trim().is_empty() {
        return Err(SheetError::new(
            SheetErrorCode::Validation,
            "file name is required",
        ));
    }
    if folder_id.trim().is_empty() {
        return Err(SheetError::new(
            SheetErrorCode::Validation,
            "no upload folder configured",
        ));
    }
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(SheetError::new(
            SheetErrorCode::Validation,
            format!("unsupported file type {mime_type}"),
        ));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(SheetError::new(
            SheetErrorCode::Validation,
            format!(
                "file exceeds {MAX_UPLOAD_BYTES} bytes ({} given)",
                bytes.len()
            ),
        ));
    }

    Ok(MutationRequest::new(
        sheet(documents::SHEET)?,
        MutationOp::UploadFile {
            file_name: file_name.trim().to_string(),
            mime_type: mime_type.to_string(),
            base64_data: STANDARD.encode(bytes),
            folder_id: folder_id.to_string(),
        },
    ))
}

/// Form input of a document registry entry, written after a successful upload
/// returned its file URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentForm {
    pub document_id: String,
    pub title: String,
    pub category: String,
    pub uploaded_by: String,
}

pub fn compose_document_entry(
    form: &DocumentForm,
    file_url: &str,
    now: NaiveDateTime,
) -> Result<MutationRequest, SheetError> {
    if form.title.trim().is_empty() {
        return Err(SheetError::new(
            SheetErrorCode::Validation,
            "document title is required",
        ));
    }

    let mut row = pad_row(Vec::new(), documents::SCHEMA.row_width);
    row[0] = TimestampFormat::IsoSeconds.render(now);
    row[1] = form.document_id.trim().to_string();
    row[2] = form.title.trim().to_string();
    row[3] = form.category.trim().to_string();
    row[4] = file_url.to_string();
    row[5] = form.uploaded_by.trim().to_string();

    Ok(MutationRequest::new(
        sheet(documents::SHEET)?,
        MutationOp::InsertRow(row),
    ))
}
