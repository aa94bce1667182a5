use cfgdrift_types::ConfigRow;

use crate::error::{StoreError, StoreResult};
use crate::rowset::{RowSet, Value};
use crate::session::{ConfigSession, INSTANCE_COLUMNS};

/// In-memory configuration store session.
///
/// Intended for tests and embedding. The live view and the identity row set
/// are whatever the caller installs, so contract violations (wrong columns,
/// extra identity rows) can be simulated directly. Baseline mutations stage
/// in memory and become "durable" on commit, mirroring the transaction
/// semantics real backends must provide.
#[derive(Debug, Default)]
pub struct MemorySession {
    instance: Option<RowSet>,
    live: Vec<ConfigRow>,
    committed: Option<Vec<ConfigRow>>,
    staged: Option<Option<Vec<ConfigRow>>>,
}

impl MemorySession {
    /// Create a session reporting the given instance identity, with an
    /// empty live view and no baseline table.
    pub fn new(instance_id: impl Into<String>, database_name: impl Into<String>) -> Self {
        let info = RowSet::new(
            INSTANCE_COLUMNS,
            vec![vec![
                Value::Text(instance_id.into()),
                Value::Text(database_name.into()),
            ]],
        );
        Self {
            instance: Some(info),
            ..Self::default()
        }
    }

    /// Replace the identity row set wholesale. For contract-violation tests.
    pub fn set_instance_info(&mut self, info: RowSet) {
        self.instance = Some(info);
    }

    /// Replace the live layered parameter view.
    pub fn set_live_rows(&mut self, rows: Vec<ConfigRow>) {
        self.live = rows;
    }

    /// The committed baseline table, if it exists. Staged, uncommitted
    /// mutations are not reflected here.
    pub fn committed_baseline(&self) -> Option<&[ConfigRow]> {
        self.committed.as_deref()
    }

    /// Discard staged baseline mutations without committing them.
    pub fn rollback(&mut self) {
        self.staged = None;
    }

    /// The baseline state reads observe: staged if present, else committed.
    fn current(&self) -> &Option<Vec<ConfigRow>> {
        self.staged.as_ref().unwrap_or(&self.committed)
    }

    /// Stage a mutation of the baseline state.
    fn stage(&mut self) -> &mut Option<Vec<ConfigRow>> {
        if self.staged.is_none() {
            self.staged = Some(self.committed.clone());
        }
        self.staged.as_mut().expect("staged state just installed")
    }
}

impl ConfigSession for MemorySession {
    fn instance_info(&mut self) -> StoreResult<RowSet> {
        self.instance
            .clone()
            .ok_or_else(|| StoreError::Connectivity("no instance configured".to_string()))
    }

    fn live_rows(&mut self) -> StoreResult<Vec<ConfigRow>> {
        Ok(self.live.clone())
    }

    fn baseline_exists(&mut self) -> StoreResult<bool> {
        Ok(self.current().is_some())
    }

    fn create_baseline(&mut self) -> StoreResult<()> {
        let state = self.stage();
        if state.is_none() {
            *state = Some(Vec::new());
        }
        Ok(())
    }

    fn baseline_rows(&mut self) -> StoreResult<Vec<ConfigRow>> {
        self.current()
            .clone()
            .ok_or(StoreError::BaselineMissing)
    }

    fn truncate_baseline(&mut self) -> StoreResult<()> {
        match self.stage() {
            Some(rows) => {
                rows.clear();
                Ok(())
            }
            None => Err(StoreError::BaselineMissing),
        }
    }

    fn append_baseline(&mut self, rows: &[ConfigRow]) -> StoreResult<()> {
        match self.stage() {
            Some(existing) => {
                existing.extend_from_slice(rows);
                Ok(())
            }
            None => Err(StoreError::BaselineMissing),
        }
    }

    fn commit(&mut self) -> StoreResult<()> {
        if let Some(staged) = self.staged.take() {
            self.committed = staged;
        }
        Ok(())
    }
}
