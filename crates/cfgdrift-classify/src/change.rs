use serde::Serialize;
use tracing::warn;

use cfgdrift_diff::DriftRow;

use crate::error::ClassifyResult;
use crate::reversal::{set_statement, unset_statement};
use crate::scope::LayerScope;

/// One logical configuration change: what drifted, from what to what, and
/// the statement an operator would run to undo it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    /// Dedup key: `<file_name> - [<section>] - <key>, <scope label>`.
    pub param_key: String,
    pub value_old: Option<String>,
    pub value_now: Option<String>,
    /// The reversal statement. A description of what to run, never executed
    /// by this engine.
    pub reversal: String,
}

/// Classify one raw match tuple into a change record.
///
/// Resolves the layer scope (rejecting layers outside the enumerated set)
/// and synthesizes the reversal: a set statement restoring `value_old`, or
/// an unset statement when the baseline carried no value.
pub fn classify(row: &DriftRow) -> ClassifyResult<ChangeRecord> {
    let scope = LayerScope::resolve(row)?;

    let param = format!("{} - [{}] - {}", row.file_name, row.section, row.key);
    let param_key = format!("{param}, {}", scope.label());

    let reversal = match &row.value_old {
        Some(old) => set_statement(&row.file_name, &scope, &row.section, &row.key, old),
        None => unset_statement(&row.file_name, &scope, &row.section, &row.key),
    };

    Ok(ChangeRecord {
        param_key,
        value_old: row.value_old.clone(),
        value_now: row.value_now.clone(),
        reversal,
    })
}

/// Insertion-ordered accumulator of change records, at most one per key.
///
/// Duplicate keys are dropped first-write-wins; iteration order equals
/// first-seen order, so reporting is deterministic.
#[derive(Debug, Default)]
pub struct ChangeSet {
    records: Vec<ChangeRecord>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record unless its key is already present.
    ///
    /// Returns `false` when the record was dropped as a duplicate. A
    /// dropped record whose old/new pair disagrees with the recorded one is
    /// logged — the first detection wins, but the conflict stays visible.
    pub fn absorb(&mut self, record: ChangeRecord) -> bool {
        if let Some(kept) = self
            .records
            .iter()
            .find(|r| r.param_key == record.param_key)
        {
            if kept.value_old != record.value_old || kept.value_now != record.value_now {
                warn!(
                    key = %record.param_key,
                    kept_old = ?kept.value_old,
                    kept_now = ?kept.value_now,
                    dropped_old = ?record.value_old,
                    dropped_now = ?record.value_now,
                    "conflicting duplicate change dropped"
                );
            }
            return false;
        }
        self.records.push(record);
        true
    }

    /// Records in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.records.iter()
    }

    /// Records in first-seen order, as a slice.
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Number of distinct changes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no changes were recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
