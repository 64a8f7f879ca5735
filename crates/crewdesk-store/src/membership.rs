// SPDX-License-Identifier: Apache-2.0

use crate::error::{SheetError, SheetErrorCode};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Secondary durable store for the one domain whose history bucket is keyed by
/// an id set persisted outside the sheet. Injected so callers never touch the
/// storage medium directly and tests can run without a filesystem.
pub trait MembershipStore {
    fn load(&self) -> Result<BTreeSet<String>, SheetError>;
    fn save(&self, ids: &BTreeSet<String>) -> Result<(), SheetError>;

    fn insert(&self, id: &str) -> Result<(), SheetError> {
        let mut ids = self.load()?;
        ids.insert(id.to_string());
        self.save(&ids)
    }

    fn remove(&self, id: &str) -> Result<(), SheetError> {
        let mut ids = self.load()?;
        ids.remove(id);
        self.save(&ids)
    }

    fn contains(&self, id: &str) -> Result<bool, SheetError> {
        Ok(self.load()?.contains(id))
    }
}

/// File-backed membership set: a JSON array of ids at a fixed path. Writes go
/// through a temp file and rename so a crash never truncates the set.
pub struct FileMembershipStore {
    path: PathBuf,
}

impl FileMembershipStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MembershipStore for FileMembershipStore {
    fn load(&self) -> Result<BTreeSet<String>, SheetError> {
        if !self.path.exists() {
            return Ok(BTreeSet::new());
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|err| SheetError::new(SheetErrorCode::Io, err.to_string()))?;
        let ids: Vec<String> = serde_json::from_str(&raw).map_err(|err| {
            SheetError::new(
                SheetErrorCode::Format,
                format!("membership file is not a JSON id array: {err}"),
            )
        })?;
        Ok(ids.into_iter().collect())
    }

    fn save(&self, ids: &BTreeSet<String>) -> Result<(), SheetError> {
        let ordered: Vec<&String> = ids.iter().collect();
        let bytes = serde_json::to_vec(&ordered)
            .map_err(|err| SheetError::new(SheetErrorCode::Internal, err.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| SheetError::new(SheetErrorCode::Io, err.to_string()))?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)
            .map_err(|err| SheetError::new(SheetErrorCode::Io, err.to_string()))?;
        fs::rename(&tmp, &self.path)
            .map_err(|err| SheetError::new(SheetErrorCode::Io, err.to_string()))?;
        Ok(())
    }
}

/// In-memory membership set for tests and ephemeral sessions.
#[derive(Default)]
pub struct InMemoryMembershipStore {
    ids: Mutex<BTreeSet<String>>,
}

impl MembershipStore for InMemoryMembershipStore {
    fn load(&self) -> Result<BTreeSet<String>, SheetError> {
        self.ids
            .lock()
            .map(|ids| ids.clone())
            .map_err(|_| SheetError::new(SheetErrorCode::Internal, "membership lock poisoned"))
    }

    fn save(&self, ids: &BTreeSet<String>) -> Result<(), SheetError> {
        let mut guard = self
            .ids
            .lock()
            .map_err(|_| SheetError::new(SheetErrorCode::Internal, "membership lock poisoned"))?;
        *guard = ids.clone();
        Ok(())
    }
}
