use cfgdrift_types::ConfigRow;

use crate::error::{StoreError, StoreResult};
use crate::rowset::RowSet;

/// Column shape of the store identity query.
pub const INSTANCE_COLUMNS: [&str; 2] = ["INSTANCE_ID", "DATABASE_NAME"];

/// A single session to the configuration store.
///
/// All implementations must satisfy these invariants:
/// - One session is acquired at startup and reused for every read and the
///   snapshot write path; operations execute sequentially.
/// - Baseline mutations (`create_baseline`, `truncate_baseline`,
///   `append_baseline`) are staged: they are visible to reads within this
///   session but become durable only on `commit`. A session dropped before
///   commit leaves no visible change.
/// - `live_rows` returns the layered parameter view as-is, including
///   `DEFAULT`-layer rows; filtering is the engine's job.
/// - Duplicate identities may appear in both the live view and the baseline
///   table and are returned as independent rows, never merged.
pub trait ConfigSession {
    /// The store identity query: one row `(INSTANCE_ID, DATABASE_NAME)`.
    ///
    /// Returned untyped so the caller can validate the shape; see
    /// [`validate_instance`].
    fn instance_info(&mut self) -> StoreResult<RowSet>;

    /// The live layered parameter view.
    fn live_rows(&mut self) -> StoreResult<Vec<ConfigRow>>;

    /// Whether the baseline table exists.
    fn baseline_exists(&mut self) -> StoreResult<bool>;

    /// Create the baseline table. A no-op if it already exists.
    fn create_baseline(&mut self) -> StoreResult<()>;

    /// All rows of the baseline table, in stored order.
    fn baseline_rows(&mut self) -> StoreResult<Vec<ConfigRow>>;

    /// Discard all baseline rows, keeping the table.
    fn truncate_baseline(&mut self) -> StoreResult<()>;

    /// Append rows to the baseline table in the given order.
    fn append_baseline(&mut self, rows: &[ConfigRow]) -> StoreResult<()>;

    /// Make staged baseline mutations durable.
    fn commit(&mut self) -> StoreResult<()>;
}

/// The validated result of the store identity query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceIdentity {
    pub instance_id: String,
    pub database_name: String,
}

/// Validate the store identity query result.
///
/// Requires exactly one row in the [`INSTANCE_COLUMNS`] shape with text
/// cells, opened to `admin_database` (case-insensitive). Anything else is a
/// contract violation: the store's schema has drifted from what this engine
/// assumes.
pub fn validate_instance(info: &RowSet, admin_database: &str) -> StoreResult<InstanceIdentity> {
    if !info.columns_match(&INSTANCE_COLUMNS) {
        return Err(StoreError::IdentityShape(format!(
            "expected columns {INSTANCE_COLUMNS:?}, got {:?}",
            info.columns
        )));
    }

    if info.rows.len() != 1 {
        return Err(StoreError::IdentityShape(format!(
            "expected exactly one row, got {}",
            info.rows.len()
        )));
    }

    let row = &info.rows[0];
    if row.len() != INSTANCE_COLUMNS.len() {
        return Err(StoreError::IdentityShape(format!(
            "expected {} cells, got {}",
            INSTANCE_COLUMNS.len(),
            row.len()
        )));
    }
    let instance_id = row[0]
        .as_text()
        .ok_or_else(|| StoreError::IdentityShape("INSTANCE_ID is not text".to_string()))?;
    let database_name = row[1]
        .as_text()
        .ok_or_else(|| StoreError::IdentityShape("DATABASE_NAME is not text".to_string()))?;

    if !database_name.eq_ignore_ascii_case(admin_database) {
        return Err(StoreError::WrongDatabase {
            expected: admin_database.to_string(),
            actual: database_name.to_string(),
        });
    }

    Ok(InstanceIdentity {
        instance_id: instance_id.to_string(),
        database_name: database_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rowset::Value;

    fn info(rows: Vec<Vec<Value>>) -> RowSet {
        RowSet::new(INSTANCE_COLUMNS, rows)
    }

    #[test]
    fn valid_handshake() {
        let rs = info(vec![vec!["HDB".into(), "SYSTEMDB".into()]]);
        let id = validate_instance(&rs, "SYSTEMDB").unwrap();
        assert_eq!(id.instance_id, "HDB");
        assert_eq!(id.database_name, "SYSTEMDB");
    }

    #[test]
    fn database_match_is_case_insensitive() {
        let rs = info(vec![vec!["HDB".into(), "SystemDB".into()]]);
        assert!(validate_instance(&rs, "SYSTEMDB").is_ok());
    }

    #[test]
    fn zero_rows_is_shape_violation() {
        let rs = info(vec![]);
        assert!(matches!(
            validate_instance(&rs, "SYSTEMDB"),
            Err(StoreError::IdentityShape(_))
        ));
    }

    #[test]
    fn multiple_rows_is_shape_violation() {
        let rs = info(vec![
            vec!["HDB".into(), "SYSTEMDB".into()],
            vec!["HDB".into(), "SYSTEMDB".into()],
        ]);
        assert!(matches!(
            validate_instance(&rs, "SYSTEMDB"),
            Err(StoreError::IdentityShape(_))
        ));
    }

    #[test]
    fn wrong_columns_is_shape_violation() {
        let rs = RowSet::new(
            ["SID", "TENANT"],
            vec![vec!["HDB".into(), "SYSTEMDB".into()]],
        );
        assert!(matches!(
            validate_instance(&rs, "SYSTEMDB"),
            Err(StoreError::IdentityShape(_))
        ));
    }

    #[test]
    fn ragged_row_is_shape_violation() {
        let rs = info(vec![vec!["HDB".into()]]);
        assert!(matches!(
            validate_instance(&rs, "SYSTEMDB"),
            Err(StoreError::IdentityShape(_))
        ));
    }

    #[test]
    fn non_text_cell_is_shape_violation() {
        let rs = info(vec![vec![Value::Integer(1), "SYSTEMDB".into()]]);
        assert!(matches!(
            validate_instance(&rs, "SYSTEMDB"),
            Err(StoreError::IdentityShape(_))
        ));
    }

    #[test]
    fn wrong_database_is_rejected() {
        let rs = info(vec![vec!["HDB".into(), "TENANT1".into()]]);
        match validate_instance(&rs, "SYSTEMDB") {
            Err(StoreError::WrongDatabase { expected, actual }) => {
                assert_eq!(expected, "SYSTEMDB");
                assert_eq!(actual, "TENANT1");
            }
            other => panic!("expected WrongDatabase, got {other:?}"),
        }
    }
}
