// SPDX-License-Identifier: Apache-2.0

use crate::ids::SheetName;
use serde::{Deserialize, Serialize};

/// Separator joining checklist/multi-select labels into one cell value.
pub const CHECKLIST_SEPARATOR: &str = ", ";

/// One outbound write against the backing service. Positional rows are
/// contiguous up to the highest used index; unused slots carry empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MutationRequest {
    pub sheet: SheetName,
    pub op: MutationOp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOp {
    InsertRow(Vec<String>),
    UpdateRow {
        row_index: usize,
        row: Vec<String>,
    },
    UpdateCell {
        row_index: usize,
        column_index: usize,
        value: String,
    },
    BulkInsert(Vec<Vec<String>>),
    UploadFile {
        file_name: String,
        mime_type: String,
        base64_data: String,
        folder_id: String,
    },
}

impl MutationRequest {
    #[must_use]
    pub fn new(sheet: SheetName, op: MutationOp) -> Self {
        Self { sheet, op }
    }

    /// Wire `action` value for this operation.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match &self.op {
            MutationOp::InsertRow(_) => "insert",
            MutationOp::UpdateRow { .. } => "update",
            MutationOp::UpdateCell { .. } => "updateCell",
            MutationOp::BulkInsert(_) => "bulkInsert",
            MutationOp::UploadFile { .. } => "uploadFile",
        }
    }

    /// Whether this write addresses a row by absolute position and therefore
    /// requires fresh key-based resolution first.
    #[must_use]
    pub fn targets_row_index(&self) -> bool {
        matches!(
            self.op,
            MutationOp::UpdateRow { .. } | MutationOp::UpdateCell { .. }
        )
    }
}

/// Pad `row` with empty strings so it is contiguous through `width` slots.
#[must_use]
pub fn pad_row(mut row: Vec<String>, width: usize) -> Vec<String> {
    while row.len() < width {
        row.push(String::new());
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::parse_sheet_name;

    #[test]
    fn actions_match_the_wire_vocabulary() {
        let sheet = parse_sheet_name("USERS").expect("sheet");
        let insert = MutationRequest::new(sheet.clone(), MutationOp::InsertRow(vec![]));
        assert_eq!(insert.action(), "insert");
        assert!(!insert.targets_row_index());

        let patch = MutationRequest::new(
            sheet,
            MutationOp::UpdateCell {
                row_index: 7,
                column_index: 3,
                value: "Deleted".to_string(),
            },
        );
        assert_eq!(patch.action(), "updateCell");
        assert!(patch.targets_row_index());
    }

    #[test]
    fn pad_row_fills_to_width() {
        let row = pad_row(vec!["a".to_string()], 4);
        assert_eq!(row, vec!["a", "", "", ""]);
        assert_eq!(pad_row(vec!["x".to_string(); 5], 3).len(), 5);
    }
}
