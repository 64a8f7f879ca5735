#![forbid(unsafe_code)]
//! Crewdesk model SSOT: row cells, validated identifiers, domain records,
//! lifecycle markers, and outbound mutation requests.

mod ids;
mod lifecycle;
mod mutation;
mod phone;
mod records;
mod row;
mod timestamp;

pub use ids::{
    parse_indent_number, parse_sheet_name, parse_step_code, parse_username, IndentNumber,
    SheetName, StepCode, Username, ValidationError, IDENT_MAX_LEN, SHEET_NAME_MAX_LEN,
};
pub use lifecycle::{Archive, Bucket, MarkerPair, ARCHIVE_SENTINELS};
pub use mutation::{pad_row, MutationOp, MutationRequest, CHECKLIST_SEPARATOR};
pub use phone::{sanitize_phone, validate_phone, PHONE_DIGITS};
pub use records::{
    Candidate, DocumentEntry, Lead, LeavingRecord, Posting, UserAccount, VendorEntry, VideoEntry,
    USER_TOMBSTONE,
};
pub use row::{cell_text, row_is_empty, Cell, RawRow};
pub use timestamp::TimestampFormat;

pub const CRATE_NAME: &str = "crewdesk-model";
