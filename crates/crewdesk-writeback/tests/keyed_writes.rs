use chrono::{NaiveDate, NaiveDateTime};
use crewdesk_model::{
    Candidate, Cell, MutationOp, MutationRequest, RawRow, SheetName, UserAccount,
};
use crewdesk_query::schema::{joining, users};
use crewdesk_query::{apply, project_rows, FilterParams, Tab};
use crewdesk_store::{RowSink, RowSource, SheetError, SheetErrorCode, WriteReceipt};
use crewdesk_writeback::{
    compose_joining_completion, compose_user_tombstone, ChecklistSubmission, WriteFlow, WritePhase,
};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// In-memory stand-in for the sheet service: reads serve stored rows, writes
/// are applied the way the backing script would apply them.
#[derive(Default)]
struct FakeService {
    sheets: RefCell<BTreeMap<String, Vec<RawRow>>>,
}

impl FakeService {
    fn seed(&self, sheet: &str, rows: Vec<Vec<&str>>) {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| Cell::Text(cell.to_string()))
                    .collect()
            })
            .collect();
        self.sheets.borrow_mut().insert(sheet.to_string(), rows);
    }

    fn row_count(&self, sheet: &str) -> usize {
        self.sheets.borrow().get(sheet).map_or(0, Vec::len)
    }
}

impl RowSource for FakeService {
    fn fetch_rows(&self, sheet: &SheetName) -> Result<Vec<RawRow>, SheetError> {
        self.sheets
            .borrow()
            .get(sheet.as_str())
            .cloned()
            .ok_or_else(|| SheetError::new(SheetErrorCode::Application, "unknown sheet"))
    }
}

impl RowSink for FakeService {
    fn execute(&self, request: &MutationRequest) -> Result<WriteReceipt, SheetError> {
        let mut sheets = self.sheets.borrow_mut();
        let rows = sheets
            .entry(request.sheet.as_str().to_string())
            .or_default();
        match &request.op {
            MutationOp::InsertRow(row) => {
                rows.push(row.iter().map(|c| Cell::Text(c.clone())).collect());
            }
            MutationOp::UpdateRow { row_index, row } => {
                let target = rows
                    .get_mut(row_index - 1)
                    .ok_or_else(|| SheetError::new(SheetErrorCode::Application, "bad row index"))?;
                *target = row.iter().map(|c| Cell::Text(c.clone())).collect();
            }
            MutationOp::UpdateCell {
                row_index,
                column_index,
                value,
            } => {
                let target = rows
                    .get_mut(row_index - 1)
                    .ok_or_else(|| SheetError::new(SheetErrorCode::Application, "bad row index"))?;
                while target.len() < *column_index {
                    target.push(Cell::Empty);
                }
                target[column_index - 1] = Cell::Text(value.clone());
            }
            MutationOp::BulkInsert(batch) => {
                for row in batch {
                    rows.push(row.iter().map(|c| Cell::Text(c.clone())).collect());
                }
            }
            MutationOp::UploadFile { .. } => {
                return Ok(WriteReceipt {
                    file_url: Some("https://files.example/stored".to_string()),
                });
            }
        }
        Ok(WriteReceipt::default())
    }
}

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 5)
        .expect("date")
        .and_hms_opt(8, 0, 9)
        .expect("time")
}

fn joining_header() -> Vec<&'static str> {
    vec![
        "Timestamp",
        "Indent Number",
        "Candidate Name",
        "Phone",
        "Department",
        "Designation",
        "Joining Date",
    ]
}

#[test]
fn completed_checklist_round_trips_to_a_history_record() {
    let service = FakeService::default();
    let mut pending_row = vec![
        "2024-01-01 10:00:00",
        "IND-1",
        "Asha Verma",
        "9876543210",
        "HR",
        "Executive",
        "2024-02-01",
    ];
    while pending_row.len() < joining::PLANNED_COL {
        pending_row.push("");
    }
    pending_row.push("2024-01-01");
    service.seed(joining::SHEET, vec![joining_header(), pending_row]);

    let candidates: Vec<Candidate> = {
        let rows = service
            .fetch_rows(&crewdesk_model::parse_sheet_name(joining::SHEET).expect("sheet"))
            .expect("rows");
        project_rows(&rows)
    };
    let candidate = candidates[0].clone();

    let submission = ChecklistSubmission {
        items: vec!["ID Proof".to_string(), "Bank Details".to_string()],
        remarks: "all clear".to_string(),
    };
    let mut flow = WriteFlow::new(&service, &service);
    flow.update_by_key(
        &joining::SCHEMA,
        joining::INDENT_NUMBER,
        "IND-1",
        |row_index, _row| compose_joining_completion(&candidate, row_index, &submission, at()),
    )
    .expect("write");
    assert_eq!(flow.phase(), WritePhase::Done);

    // Re-fetch and re-project: same displayed fields, now in history, with the
    // zero-padded completion stamp intact.
    let rows = service
        .fetch_rows(&crewdesk_model::parse_sheet_name(joining::SHEET).expect("sheet"))
        .expect("rows");
    let reloaded: Vec<Candidate> = project_rows(&rows);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].candidate_name, candidate.candidate_name);
    assert_eq!(reloaded[0].department, candidate.department);
    assert_eq!(reloaded[0].markers.trigger, "2024-01-01");
    assert_eq!(reloaded[0].markers.completion, "2024-01-05 08:00:09");
    let history = apply(&reloaded, &FilterParams::tab(Tab::History));
    assert_eq!(history.len(), 1);
}

#[test]
fn resolution_follows_rows_that_shifted_since_the_last_fetch() {
    let service = FakeService::default();
    let mut target = vec!["t", "IND-2", "Meena", "9876543210", "HR", "Clerk", "d"];
    while target.len() < joining::PLANNED_COL {
        target.push("");
    }
    target.push("2024-01-01");
    service.seed(joining::SHEET, vec![joining_header(), target]);

    // Another client inserts a row above ours between fetch and write.
    {
        let mut sheets = service.sheets.borrow_mut();
        let rows = sheets.get_mut(joining::SHEET).expect("sheet");
        rows.insert(1, vec![Cell::Text("t".into()), Cell::Text("IND-9".into())]);
    }

    let (row_index, _row) = crewdesk_writeback::resolve_row_by_key(
        &service,
        &joining::SCHEMA,
        joining::INDENT_NUMBER,
        "IND-2",
    )
    .expect("resolved");
    assert_eq!(row_index, 3, "stale index 2 would have hit the wrong row");
}

#[test]
fn vanished_records_surface_a_distinct_terminal_error() {
    let service = FakeService::default();
    service.seed(joining::SHEET, vec![joining_header()]);

    let mut flow = WriteFlow::new(&service, &service);
    let err = flow
        .update_by_key(
            &joining::SCHEMA,
            joining::INDENT_NUMBER,
            "IND-404",
            |_row_index, _row| unreachable!("build must not run for a vanished record"),
        )
        .expect_err("missing record");
    assert_eq!(err.code, SheetErrorCode::NotFound);
    assert!(err.message.contains("deleted or modified"));
    assert_eq!(flow.phase(), WritePhase::NotFound);
}

#[test]
fn user_delete_is_a_tombstone_not_a_row_removal() {
    let service = FakeService::default();
    service.seed(
        users::SHEET,
        vec![
            vec!["priya", "Priya N", "admin", "HR"],
            vec!["arun", "Arun S", "viewer", "Accounts"],
        ],
    );
    let before = service.row_count(users::SHEET);

    let accounts: Vec<UserAccount> = {
        let rows = service
            .fetch_rows(&crewdesk_model::parse_sheet_name(users::SHEET).expect("sheet"))
            .expect("rows");
        project_rows(&rows)
    };
    let arun = accounts
        .iter()
        .find(|u| u.username == "arun")
        .expect("arun")
        .clone();

    let mut flow = WriteFlow::new(&service, &service);
    flow.update_by_key(
        &users::SCHEMA,
        users::USERNAME,
        "arun",
        |row_index, _row| compose_user_tombstone(&arun, row_index),
    )
    .expect("tombstone write");

    assert_eq!(service.row_count(users::SHEET), before, "soft delete keeps the row");
    let rows = service
        .fetch_rows(&crewdesk_model::parse_sheet_name(users::SHEET).expect("sheet"))
        .expect("rows");
    let reloaded: Vec<UserAccount> = project_rows(&rows);
    assert_eq!(reloaded.len(), 2);
    let visible = apply(&reloaded, &FilterParams::tab(Tab::All));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].username, "priya");
}
