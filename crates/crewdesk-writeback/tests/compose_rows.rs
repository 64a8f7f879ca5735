use chrono::{NaiveDate, NaiveDateTime};
use crewdesk_writeback::{
    compose_call_outcome, compose_file_upload, compose_lead_bulk_import, compose_lead_intake,
    compose_vendor_entry, join_checklist, LeadForm, VendorForm, MAX_UPLOAD_BYTES,
};
use crewdesk_model::{Lead, MarkerPair, MutationOp};
use crewdesk_store::SheetErrorCode;

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 7)
        .expect("date")
        .and_hms_opt(9, 5, 4)
        .expect("time")
}

fn lead_form() -> LeadForm {
    LeadForm {
        lead_number: "LD-7".to_string(),
        indent_number: "IND-4".to_string(),
        candidate_name: "Ravi Kumar".to_string(),
        phone: "98-76 543210x".to_string(),
        post: "Welder".to_string(),
        source: "referral".to_string(),
    }
}

#[test]
fn lead_intake_row_is_contiguous_tagged_and_zero_padded() {
    let request = compose_lead_intake(&lead_form(), at()).expect("request");
    assert_eq!(request.action(), "insert");
    let MutationOp::InsertRow(row) = &request.op else {
        panic!("expected insert");
    };
    assert_eq!(row.len(), 12);
    assert_eq!(row[0], "03/07/2024 09:05:04");
    assert_eq!(row[4], "9876543210");
    assert_eq!(row[7], "CT-1");
    // Trigger marker stamped, completion left empty: the lead starts pending.
    assert_eq!(row[10], "03/07/2024 09:05:04");
    assert_eq!(row[11], "");
}

#[test]
fn short_phone_blocks_the_submit_before_any_write() {
    let mut form = lead_form();
    form.phone = "123".to_string();
    let err = compose_lead_intake(&form, at()).expect_err("must block");
    assert_eq!(err.code, SheetErrorCode::Validation);
}

#[test]
fn call_outcome_patches_the_completion_cell_one_based() {
    let lead = Lead {
        row_index: 9,
        timestamp: "t".to_string(),
        lead_number: "LD-7".to_string(),
        indent_number: "IND-4".to_string(),
        candidate_name: "Ravi Kumar".to_string(),
        phone: "9876543210".to_string(),
        post: "Welder".to_string(),
        source: "referral".to_string(),
        markers: MarkerPair::new("03/01/2024 10:00:00", ""),
    };
    let request = compose_call_outcome(&lead, 9, at()).expect("request");
    let MutationOp::UpdateCell {
        row_index,
        column_index,
        value,
    } = &request.op
    else {
        panic!("expected cell patch");
    };
    assert_eq!(*row_index, 9);
    // Schema column 11, wire address 12.
    assert_eq!(*column_index, 12);
    assert_eq!(value, "03/07/2024 09:05:04");
}

#[test]
fn vendor_entry_requires_name_and_valid_phone() {
    let mut form = VendorForm {
        vendor_name: "Sharma Supplies".to_string(),
        contact_person: "R Sharma".to_string(),
        phone: "9876543210".to_string(),
        category: "Stationery".to_string(),
        address: "Plot 4".to_string(),
    };
    assert!(compose_vendor_entry(&form, at()).is_ok());

    form.phone = "98765".to_string();
    assert_eq!(
        compose_vendor_entry(&form, at()).expect_err("short phone").code,
        SheetErrorCode::Validation
    );

    form.phone = "9876543210".to_string();
    form.vendor_name = "  ".to_string();
    assert_eq!(
        compose_vendor_entry(&form, at()).expect_err("blank name").code,
        SheetErrorCode::Validation
    );
}

#[test]
fn bulk_import_validates_every_lead_before_composing() {
    let good = lead_form();
    let mut bad = lead_form();
    bad.phone = "12".to_string();

    let err = compose_lead_bulk_import(&[good.clone(), bad], at()).expect_err("one bad lead");
    assert_eq!(err.code, SheetErrorCode::Validation);
    assert!(compose_lead_bulk_import(&[], at()).is_err());

    let request = compose_lead_bulk_import(&[good.clone(), good], at()).expect("batch");
    assert_eq!(request.action(), "bulkInsert");
    let MutationOp::BulkInsert(rows) = &request.op else {
        panic!("expected bulk insert");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][7], "CT-1");
}

#[test]
fn checklist_labels_join_with_comma_space() {
    assert_eq!(
        join_checklist(&["ID Proof", "Bank Details", "Photos"]),
        "ID Proof, Bank Details, Photos"
    );
}

#[test]
fn upload_validation_rejects_bad_type_size_and_missing_folder() {
    let err = compose_file_upload("cv.docx", "application/msword", b"x", "folder-1")
        .expect_err("bad mime");
    assert_eq!(err.code, SheetErrorCode::Validation);

    let big = vec![0u8; MAX_UPLOAD_BYTES + 1];
    let err = compose_file_upload("cv.pdf", "application/pdf", &big, "folder-1")
        .expect_err("too big");
    assert_eq!(err.code, SheetErrorCode::Validation);

    let err = compose_file_upload("cv.pdf", "application/pdf", b"x", " ")
        .expect_err("no folder");
    assert_eq!(err.code, SheetErrorCode::Validation);

    let request =
        compose_file_upload("cv.pdf", "application/pdf", b"hello", "folder-1").expect("ok");
    assert_eq!(request.action(), "uploadFile");
    let MutationOp::UploadFile { base64_data, .. } = &request.op else {
        panic!("expected upload");
    };
    assert_eq!(base64_data, "aGVsbG8=");
}
