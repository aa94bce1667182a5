use serde::Serialize;

use cfgdrift_types::ParamId;

use crate::error::{DiffError, DiffResult};

/// Column order of the drift tuple stream. Every match batch must carry
/// exactly this descriptor; the classifier refuses anything else.
pub const DRIFT_COLUMNS: [&str; 9] = [
    "HOST",
    "FILE_NAME",
    "SECTION",
    "KEY",
    "LAYER_NAME",
    "DATABASE_NAME",
    "PORT",
    "VALUE_OLD",
    "VALUE_NOW",
];

/// One raw match tuple: a parameter identity with its baseline and live
/// values. Either value may be absent — an absent `value_now` means the
/// override is gone live, an absent `value_old` means the baseline had no
/// value for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DriftRow {
    pub host: String,
    pub file_name: String,
    pub section: String,
    pub key: String,
    pub layer_name: String,
    pub database_name: String,
    pub port: Option<i64>,
    pub value_old: Option<String>,
    pub value_now: Option<String>,
}

impl DriftRow {
    /// Build a match tuple from an identity and the two values.
    pub fn new(id: &ParamId, value_old: Option<String>, value_now: Option<String>) -> Self {
        Self {
            host: id.host.clone(),
            file_name: id.file_name.clone(),
            section: id.section.clone(),
            key: id.key.clone(),
            layer_name: id.layer_name.clone(),
            database_name: id.database_name.clone(),
            port: id.port,
            value_old,
            value_now,
        }
    }
}

/// A batch of match tuples together with its column descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriftRows {
    pub columns: Vec<String>,
    pub rows: Vec<DriftRow>,
}

impl DriftRows {
    /// Wrap rows under the canonical descriptor.
    pub fn new(rows: Vec<DriftRow>) -> Self {
        Self {
            columns: DRIFT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    /// Validate the column descriptor against [`DRIFT_COLUMNS`].
    ///
    /// Must pass before any row is consumed; a mismatch is a fatal
    /// configuration-store contract violation, not a recoverable condition.
    pub fn validate(&self) -> DiffResult<()> {
        let expected: Vec<String> = DRIFT_COLUMNS.iter().map(|c| c.to_string()).collect();
        if self.columns != expected {
            return Err(DiffError::ShapeMismatch {
                expected,
                got: self.columns.clone(),
            });
        }
        Ok(())
    }

    /// Number of match tuples in the batch.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the batch holds no tuples.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
