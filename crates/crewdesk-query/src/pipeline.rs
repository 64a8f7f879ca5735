// SPDX-License-Identifier: Apache-2.0

use crate::header::resolve;
use crate::project::SheetRecord;
use crewdesk_model::{parse_sheet_name, RawRow};
use crewdesk_store::{RowSource, SheetError, SheetErrorCode};

/// Project an already-fetched sheet into domain records: slice off the rows
/// before `data_start`, resolve header names once, then map every remaining
/// row, skipping structurally empty ones.
#[must_use]
pub fn project_rows<R: SheetRecord>(rows: &[RawRow]) -> Vec<R> {
    let schema = R::schema();
    let header_row = schema.header_row.and_then(|index| rows.get(index));
    let indices = resolve(header_row, schema.fields);
    rows.iter()
        .enumerate()
        .skip(schema.data_start)
        .filter_map(|(position, row)| R::project(row, &indices, position + 1))
        .collect()
}

/// Fetch one domain's sheet and project it. The projected list is a
/// rebuildable cache of the remote sheet; callers re-run this after every
/// successful write instead of merging locally.
pub fn load_records<R: SheetRecord>(source: &dyn RowSource) -> Result<Vec<R>, SheetError> {
    let sheet = parse_sheet_name(R::schema().sheet)
        .map_err(|err| SheetError::new(SheetErrorCode::Internal, err.to_string()))?;
    let rows = source.fetch_rows(&sheet)?;
    Ok(project_rows::<R>(&rows))
}

/// Fetch several sheets for one combined view. All-or-nothing: any failure
/// drops the whole cycle so a page never renders partial results.
pub fn fetch_all(
    source: &dyn RowSource,
    sheets: &[&str],
) -> Result<Vec<Vec<RawRow>>, SheetError> {
    let mut fetched = Vec::with_capacity(sheets.len());
    for name in sheets {
        let sheet = parse_sheet_name(name)
            .map_err(|err| SheetError::new(SheetErrorCode::Internal, err.to_string()))?;
        fetched.push(source.fetch_rows(&sheet)?);
    }
    Ok(fetched)
}
