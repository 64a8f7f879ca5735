// SPDX-License-Identifier: Apache-2.0

use crewdesk_model::{cell_text, RawRow};
use std::collections::BTreeMap;

/// One logical field a page needs: the header name to look for and the
/// hard-coded column to fall back to when the name is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub default_index: usize,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, default_index: usize) -> Self {
        Self {
            name,
            default_index,
        }
    }
}

/// Logical field name -> column position, resolved once per fetch.
///
/// Resolution is total: a missing header row or an unmatched name silently
/// degrades to the field's default index. That silence is a known latent-bug
/// surface of the backing sheets and is preserved deliberately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldIndexMap {
    indices: BTreeMap<&'static str, usize>,
}

impl FieldIndexMap {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Cell text for a resolved field; empty string when the field was never
    /// requested or the row is short.
    #[must_use]
    pub fn text(&self, row: &RawRow, name: &str) -> String {
        self.get(name).map(|i| cell_text(row, i)).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Resolve every required field against an optional header row.
///
/// Matching is exact on the trimmed, case-folded header name. Absent header or
/// unmatched name falls back to the spec's default index; the function never
/// fails and always returns one index per requested field.
#[must_use]
pub fn resolve(header_row: Option<&RawRow>, required: &[FieldSpec]) -> FieldIndexMap {
    let mut indices = BTreeMap::new();
    for spec in required {
        let found = header_row.and_then(|row| {
            row.iter().position(|cell| {
                cell.as_text().trim().eq_ignore_ascii_case(spec.name.trim())
            })
        });
        indices.insert(spec.name, found.unwrap_or(spec.default_index));
    }
    FieldIndexMap { indices }
}
