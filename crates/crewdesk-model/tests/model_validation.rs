use crewdesk_model::{
    parse_indent_number, parse_sheet_name, parse_step_code, parse_username, Archive, UserAccount,
    USER_TOMBSTONE,
};

#[test]
fn indent_number_rejects_empty_and_odd_characters() {
    assert!(parse_indent_number("").is_err());
    assert!(parse_indent_number("  ").is_err());
    assert!(parse_indent_number("IND 1").is_err());
    assert_eq!(parse_indent_number(" IND-1 ").expect("indent").as_str(), "IND-1");
}

#[test]
fn step_code_requires_prefix_dash_number() {
    assert!(parse_step_code("J1").is_err());
    assert!(parse_step_code("j-1").is_err());
    assert!(parse_step_code("JOINX-1").is_err());
    assert!(parse_step_code("J-").is_err());
    assert_eq!(parse_step_code("CT-1").expect("step").as_str(), "CT-1");
    assert_eq!(parse_step_code("J-12").expect("step").as_str(), "J-12");
}

#[test]
fn username_rejects_embedded_whitespace() {
    assert!(parse_username("two words").is_err());
    assert_eq!(parse_username(" priya ").expect("username").as_str(), "priya");
}

#[test]
fn sheet_name_accepts_spaces_but_not_blanks() {
    assert!(parse_sheet_name("   ").is_err());
    assert_eq!(
        parse_sheet_name("CALL TRACKER").expect("sheet").as_str(),
        "CALL TRACKER"
    );
}

#[test]
fn user_tombstone_check_is_case_insensitive() {
    let mut user = UserAccount {
        row_index: 3,
        username: "priya".to_string(),
        full_name: "Priya N".to_string(),
        role: "admin".to_string(),
        department: "HR".to_string(),
        status: String::new(),
    };
    assert!(!user.is_deleted());
    user.status = USER_TOMBSTONE.to_lowercase();
    assert!(user.is_deleted());
}

#[test]
fn leaving_archive_uses_sentinel_set() {
    assert_eq!(Archive::from_raw("Deleted"), Archive::Archived);
    assert_eq!(Archive::from_raw("resigned"), Archive::Active);
}
