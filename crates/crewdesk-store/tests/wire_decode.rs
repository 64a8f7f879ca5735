use crewdesk_model::{parse_sheet_name, Cell, MutationOp, MutationRequest};
use crewdesk_store::{decode_body, form_fields, FetchEnvelope, SheetErrorCode, WriteEnvelope};

#[test]
fn fetch_envelope_decodes_mixed_cell_types() {
    let body = r#"{"success":true,"data":[["IND-1","Asha",42,""],["IND-2",null]]}"#;
    let envelope: FetchEnvelope = decode_body(body).expect("envelope");
    assert!(envelope.success);
    let rows = envelope.data.expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][2], Cell::Number(42.0));
    assert_eq!(rows[1][1], Cell::Empty);
}

#[test]
fn missing_data_field_is_an_empty_sheet() {
    let envelope: FetchEnvelope = decode_body(r#"{"success":true}"#).expect("envelope");
    assert!(envelope.data.is_none());
}

#[test]
fn html_body_surfaces_misconfiguration_not_parse_failure() {
    let err = decode_body::<FetchEnvelope>("  <!DOCTYPE html><html><body>Sign in</body></html>")
        .expect_err("html must fail");
    assert_eq!(err.code, SheetErrorCode::Misconfigured);

    let err = decode_body::<FetchEnvelope>("definitely not json").expect_err("junk must fail");
    assert_eq!(err.code, SheetErrorCode::Format);
}

#[test]
fn write_envelope_reads_camel_case_file_url() {
    let envelope: WriteEnvelope =
        decode_body(r#"{"success":true,"fileUrl":"https://files.example/doc.pdf"}"#)
            .expect("envelope");
    assert_eq!(
        envelope.file_url.as_deref(),
        Some("https://files.example/doc.pdf")
    );
}

#[test]
fn update_cell_form_fields_carry_row_and_column() {
    let request = MutationRequest::new(
        parse_sheet_name("USERS").expect("sheet"),
        MutationOp::UpdateCell {
            row_index: 12,
            column_index: 8,
            value: "Deleted".to_string(),
        },
    );
    let fields = form_fields(&request).expect("fields");
    assert!(fields.contains(&("action", "updateCell".to_string())));
    assert!(fields.contains(&("sheetName", "USERS".to_string())));
    assert!(fields.contains(&("rowIndex", "12".to_string())));
    assert!(fields.contains(&("columnIndex", "8".to_string())));
    assert!(fields.contains(&("value", "Deleted".to_string())));
}

#[test]
fn insert_form_fields_json_encode_the_row() {
    let request = MutationRequest::new(
        parse_sheet_name("VENDORS").expect("sheet"),
        MutationOp::InsertRow(vec!["A".to_string(), String::new(), "9876543210".to_string()]),
    );
    let fields = form_fields(&request).expect("fields");
    let row_data = fields
        .iter()
        .find(|(name, _)| *name == "rowData")
        .map(|(_, value)| value.clone())
        .expect("rowData present");
    assert_eq!(row_data, r#"["A","","9876543210"]"#);
}
