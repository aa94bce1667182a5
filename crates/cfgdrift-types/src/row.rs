use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::param::ParamId;

/// One `(identity, value)` row from the baseline table or the live view.
///
/// A `None` value means the store carried an explicit NULL for the row; the
/// matcher treats such rows the same as absent ones when deciding whether a
/// parameter reverted to its default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRow {
    pub id: ParamId,
    pub value: Option<String>,
}

impl ConfigRow {
    /// Build a row from an identity and an optional value.
    pub fn new(id: ParamId, value: Option<impl Into<String>>) -> Self {
        Self {
            id,
            value: value.map(Into::into),
        }
    }

    /// Baseline capture order: `(database_name, file_name, section, key,
    /// host)`. Snapshots are sorted this way so baseline content is
    /// deterministic and reviewable.
    pub fn baseline_order(a: &ConfigRow, b: &ConfigRow) -> Ordering {
        (
            &a.id.database_name,
            &a.id.file_name,
            &a.id.section,
            &a.id.key,
            &a.id.host,
        )
            .cmp(&(
                &b.id.database_name,
                &b.id.file_name,
                &b.id.section,
                &b.id.key,
                &b.id.host,
            ))
    }
}
