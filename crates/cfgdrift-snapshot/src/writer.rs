use tracing::info;

use cfgdrift_store::ConfigSession;
use cfgdrift_types::ConfigRow;

use crate::error::SnapshotResult;

/// Capture the current layered configuration into the baseline table.
///
/// Loads the live view, drops `DEFAULT`-layer rows (defaults are not
/// overrides), sorts by `(database_name, file_name, section, key, host)` for
/// deterministic, reviewable baseline content, and appends. With `reset`,
/// existing baseline rows are discarded first (destructive re-baseline);
/// without it the table is expected to be empty (first initialization).
///
/// The baseline table must already exist — creating it is the caller's
/// precondition — and the caller must commit the session afterwards. A
/// failure before commit leaves no visible change.
///
/// Returns the number of rows captured.
pub fn capture(session: &mut dyn ConfigSession, reset: bool) -> SnapshotResult<usize> {
    let live = session.live_rows()?;
    let total = live.len();

    let mut rows: Vec<ConfigRow> = live
        .into_iter()
        .filter(|r| !r.id.is_default_layer())
        .collect();
    rows.sort_by(ConfigRow::baseline_order);

    if reset {
        session.truncate_baseline()?;
    }
    session.append_baseline(&rows)?;

    info!(
        captured = rows.len(),
        skipped_defaults = total - rows.len(),
        reset,
        "captured configuration baseline"
    );
    Ok(rows.len())
}
