#![forbid(unsafe_code)]
//! The write pipeline: mutation composition, the resolve-then-write protocol
//! for row-targeted mutations, and the local double-submit latch.

mod compose;
mod guard;
mod resolve;

pub use compose::{
    compose_call_outcome, compose_document_entry, compose_file_upload, compose_joining_completion,
    compose_lead_bulk_import, compose_lead_intake, compose_leaving_archive, compose_user_tombstone,
    compose_vendor_entry, join_checklist, ChecklistSubmission, DocumentForm, LeadForm, VendorForm,
    ALLOWED_MIME_TYPES, MAX_UPLOAD_BYTES,
};
pub use guard::{SubmitGuard, SubmitToken};
pub use resolve::{resolve_row_by_key, WriteFlow, WritePhase};

pub const CRATE_NAME: &str = "crewdesk-writeback";
