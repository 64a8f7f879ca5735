// SPDX-License-Identifier: Apache-2.0

use crate::error::{SheetError, SheetErrorCode};
use crewdesk_model::{MutationOp, MutationRequest, RawRow};
use serde::{Deserialize, Serialize};

/// Envelope of a read. `data` may be absent on an empty sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<RawRow>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope of a write. `fileUrl` is only present for uploads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteEnvelope {
    pub success: bool,
    #[serde(default, rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A misconfigured deployment answers HTML (a login or error page) instead of
/// JSON. Detect it before parsing so the surfaced error names the real problem.
#[must_use]
pub fn looks_like_html(body: &str) -> bool {
    let trimmed = body.trim_start();
    let head = trimmed.get(..64).unwrap_or(trimmed);
    let lowered = head.to_ascii_lowercase();
    lowered.starts_with("<html") || lowered.starts_with("<!doctype")
}

/// Decode a response body into `T`, distinguishing the HTML case from a
/// generic parse failure.
pub fn decode_body<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T, SheetError> {
    if looks_like_html(body) {
        return Err(SheetError::new(
            SheetErrorCode::Misconfigured,
            "service answered HTML instead of JSON; check the deployment URL and access settings",
        ));
    }
    serde_json::from_str::<T>(body)
        .map_err(|err| SheetError::new(SheetErrorCode::Format, format!("invalid JSON body: {err}")))
}

/// Form fields for one mutation, in wire order. Pure so the encoding is
/// testable without a live endpoint.
pub fn form_fields(request: &MutationRequest) -> Result<Vec<(&'static str, String)>, SheetError> {
    let mut fields = vec![
        ("action", request.action().to_string()),
        ("sheetName", request.sheet.as_str().to_string()),
    ];
    match &request.op {
        MutationOp::InsertRow(row) => {
            fields.push(("rowData", encode_json(row)?));
        }
        MutationOp::UpdateRow { row_index, row } => {
            fields.push(("rowIndex", row_index.to_string()));
            fields.push(("rowData", encode_json(row)?));
        }
        MutationOp::UpdateCell {
            row_index,
            column_index,
            value,
        } => {
            fields.push(("rowIndex", row_index.to_string()));
            fields.push(("columnIndex", column_index.to_string()));
            fields.push(("value", value.clone()));
        }
        MutationOp::BulkInsert(rows) => {
            fields.push(("rowsData", encode_json(rows)?));
        }
        MutationOp::UploadFile {
            file_name,
            mime_type,
            base64_data,
            folder_id,
        } => {
            fields.push(("fileName", file_name.clone()));
            fields.push(("mimeType", mime_type.clone()));
            fields.push(("base64Data", base64_data.clone()));
            fields.push(("folderId", folder_id.clone()));
        }
    }
    Ok(fields)
}

fn encode_json<T: Serialize>(value: &T) -> Result<String, SheetError> {
    serde_json::to_string(value)
        .map_err(|err| SheetError::new(SheetErrorCode::Internal, err.to_string()))
}
