// SPDX-License-Identifier: Apache-2.0

use crewdesk_model::{MutationRequest, RawRow};
use crewdesk_query::{resolve, SheetSchema};
use crewdesk_store::{RowSink, RowSource, SheetError, SheetErrorCode, WriteReceipt};
use tracing::{debug, warn};

/// Phases of a row-targeted write. Row indices discovered at fetch time go
/// stale whenever another client writes, so every row-targeted mutation
/// re-resolves its target by business key immediately before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePhase {
    Idle,
    Resolving,
    Found(usize),
    NotFound,
    Writing,
    Done,
    Failed,
}

/// Locate the row whose `key_field` equals `key` in a freshly fetched sheet.
///
/// Returns the 1-based absolute row index and the row itself. `NotFound` is a
/// distinct terminal error: the record may have been deleted or modified by a
/// concurrent editor, and the caller must surface exactly that.
pub fn resolve_row_by_key(
    source: &dyn RowSource,
    schema: &SheetSchema,
    key_field: &str,
    key: &str,
) -> Result<(usize, RawRow), SheetError> {
    let sheet = crewdesk_model::parse_sheet_name(schema.sheet)
        .map_err(|err| SheetError::new(SheetErrorCode::Internal, err.to_string()))?;
    let rows = source.fetch_rows(&sheet)?;
    let header_row = schema.header_row.and_then(|index| rows.get(index));
    let indices = resolve(header_row, schema.fields);

    let wanted = key.trim();
    for (position, row) in rows.iter().enumerate().skip(schema.data_start) {
        if indices.text(row, key_field).trim() == wanted {
            return Ok((position + 1, row.clone()));
        }
    }

    Err(SheetError::new(
        SheetErrorCode::NotFound,
        format!(
            "record '{wanted}' was not found in {}; it may have been deleted or modified",
            schema.sheet
        ),
    ))
}

/// Driver for the resolve-then-write protocol. Tracks the phase it is in so
/// callers (and tests) can observe where a write stopped.
pub struct WriteFlow<'a> {
    source: &'a dyn RowSource,
    sink: &'a dyn RowSink,
    phase: WritePhase,
}

impl<'a> WriteFlow<'a> {
    #[must_use]
    pub fn new(source: &'a dyn RowSource, sink: &'a dyn RowSink) -> Self {
        Self {
            source,
            sink,
            phase: WritePhase::Idle,
        }
    }

    #[must_use]
    pub fn phase(&self) -> WritePhase {
        self.phase
    }

    /// Re-resolve `key` in `schema`'s sheet, build the mutation against the
    /// fresh row index, and execute it. A cached row index from an earlier
    /// fetch must never reach this function.
    pub fn update_by_key<F>(
        &mut self,
        schema: &SheetSchema,
        key_field: &str,
        key: &str,
        build: F,
    ) -> Result<WriteReceipt, SheetError>
    where
        F: FnOnce(usize, &RawRow) -> Result<MutationRequest, SheetError>,
    {
        self.phase = WritePhase::Resolving;
        let (row_index, row) = match resolve_row_by_key(self.source, schema, key_field, key) {
            Ok(found) => found,
            Err(err) => {
                self.phase = if err.code == SheetErrorCode::NotFound {
                    WritePhase::NotFound
                } else {
                    WritePhase::Failed
                };
                return Err(err);
            }
        };
        self.phase = WritePhase::Found(row_index);
        debug!(
            sheet = schema.sheet,
            key,
            row_index,
            "resolved row target by key"
        );

        let request = build(row_index, &row)?;
        if !request.targets_row_index() {
            self.phase = WritePhase::Failed;
            return Err(SheetError::new(
                SheetErrorCode::Internal,
                "key-resolved writes must target a row index",
            ));
        }

        self.phase = WritePhase::Writing;
        match self.sink.execute(&request) {
            Ok(receipt) => {
                self.phase = WritePhase::Done;
                Ok(receipt)
            }
            Err(err) => {
                warn!(sheet = schema.sheet, key, error = %err, "row-targeted write failed");
                self.phase = WritePhase::Failed;
                Err(err)
            }
        }
    }
}
