use thiserror::Error;

use cfgdrift_classify::ClassifyError;
use cfgdrift_diff::DiffError;
use cfgdrift_snapshot::SnapshotError;
use cfgdrift_store::StoreError;

/// Top-level CLI error: every fatal condition, mapped to its exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Profiles file missing, unreadable, or the profile is unknown.
    #[error("profile error: {0}")]
    Profile(String),

    /// The requested mode does not fit the current baseline state.
    #[error("{0}")]
    Precondition(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err {
        StoreError::IdentityShape(_) | StoreError::WrongDatabase { .. } => 2,
        StoreError::Connectivity(_)
        | StoreError::BaselineMissing
        | StoreError::Serialization(_)
        | StoreError::Io(_) => 1,
    }
}

impl CliError {
    /// Process exit code for this failure. `0` is reserved for success,
    /// including a check run that found no drift.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Profile(_) | CliError::Precondition(_) | CliError::Output(_) => 1,
            CliError::Store(err) => store_exit_code(err),
            CliError::Snapshot(SnapshotError::Store(err)) => store_exit_code(err),
            CliError::Diff(DiffError::ShapeMismatch { .. }) => 4,
            CliError::Classify(ClassifyError::UnrecognizedLayer(_)) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_class_failures_exit_1() {
        assert_eq!(CliError::Profile("missing".into()).exit_code(), 1);
        assert_eq!(CliError::Precondition("wrong mode".into()).exit_code(), 1);
        assert_eq!(
            CliError::Store(StoreError::Connectivity("down".into())).exit_code(),
            1
        );
        assert_eq!(
            CliError::Store(StoreError::BaselineMissing).exit_code(),
            1
        );
    }

    #[test]
    fn identity_contract_violations_exit_2() {
        assert_eq!(
            CliError::Store(StoreError::IdentityShape("two rows".into())).exit_code(),
            2
        );
        assert_eq!(
            CliError::Store(StoreError::WrongDatabase {
                expected: "SYSTEMDB".into(),
                actual: "T1".into(),
            })
            .exit_code(),
            2
        );
    }

    #[test]
    fn drift_shape_violations_exit_4() {
        assert_eq!(
            CliError::Diff(DiffError::ShapeMismatch {
                expected: vec!["HOST".into()],
                got: vec!["H".into()],
            })
            .exit_code(),
            4
        );
    }

    #[test]
    fn unrecognized_layer_exits_5() {
        assert_eq!(
            CliError::Classify(ClassifyError::UnrecognizedLayer("TENANT".into())).exit_code(),
            5
        );
    }

    #[test]
    fn snapshot_errors_map_through_to_store_codes() {
        let err = CliError::Snapshot(SnapshotError::Store(StoreError::IdentityShape(
            "bad".into(),
        )));
        assert_eq!(err.exit_code(), 2);

        let err = CliError::Snapshot(SnapshotError::Store(StoreError::Connectivity(
            "down".into(),
        )));
        assert_eq!(err.exit_code(), 1);
    }
}
