use std::collections::HashMap;

use cfgdrift_types::{ConfigRow, ParamId};

use crate::drift_row::{DriftRow, DriftRows};

/// Hash index over rows by full identity. Duplicate identities are kept as
/// independent entries, in input order.
fn index_rows(rows: &[ConfigRow]) -> HashMap<&ParamId, Vec<&ConfigRow>> {
    let mut index: HashMap<&ParamId, Vec<&ConfigRow>> = HashMap::new();
    for row in rows {
        index.entry(&row.id).or_default().push(row);
    }
    index
}

/// Baseline-driven match: parameters that changed value or lost their
/// override.
///
/// Left-outer join of baseline rows against live rows on the full identity,
/// in baseline order. A tuple is emitted when
/// - both sides carry a value and the values differ, or
/// - the live side carries no value (no matching live row, or a matching
///   row with a NULL value) and the baseline layer is not `DEFAULT` — an
///   override that has been reverted or removed.
pub fn find_changed(baseline: &[ConfigRow], live: &[ConfigRow]) -> DriftRows {
    let index = index_rows(live);
    let mut out = Vec::new();

    for b in baseline {
        match index.get(&b.id) {
            None => {
                if !b.id.is_default_layer() {
                    out.push(DriftRow::new(&b.id, b.value.clone(), None));
                }
            }
            Some(matches) => {
                for l in matches.iter() {
                    match (&b.value, &l.value) {
                        (Some(old), Some(now)) => {
                            if old != now {
                                out.push(DriftRow::new(
                                    &b.id,
                                    Some(old.clone()),
                                    Some(now.clone()),
                                ));
                            }
                        }
                        (_, None) => {
                            if !b.id.is_default_layer() {
                                out.push(DriftRow::new(&b.id, b.value.clone(), None));
                            }
                        }
                        (None, Some(_)) => {}
                    }
                }
            }
        }
    }

    DriftRows::new(out)
}

/// Live-driven match: parameters newly overridden since the last snapshot.
///
/// Right-outer join of live rows against baseline rows on the full
/// identity, in live order, restricted to live rows whose layer is not
/// `DEFAULT`. A tuple is emitted per pairing where the baseline side
/// carries no value: no baseline row for the identity at all, or a matching
/// baseline row with a NULL value.
pub fn find_new(baseline: &[ConfigRow], live: &[ConfigRow]) -> DriftRows {
    let index = index_rows(baseline);
    let mut out = Vec::new();

    for l in live {
        if l.id.is_default_layer() {
            continue;
        }
        match index.get(&l.id) {
            None => out.push(DriftRow::new(&l.id, None, l.value.clone())),
            Some(matches) => {
                for b in matches.iter() {
                    if b.value.is_none() {
                        out.push(DriftRow::new(&l.id, None, l.value.clone()));
                    }
                }
            }
        }
    }

    DriftRows::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, layer: &str, value: Option<&str>) -> ConfigRow {
        ConfigRow::new(
            ParamId::new("h1", "f1.ini", "s1", key, layer, "", None),
            value,
        )
    }

    fn db_row(key: &str, db: &str, value: Option<&str>) -> ConfigRow {
        ConfigRow::new(
            ParamId::new("", "f1.ini", "s1", key, "DATABASE", db, None),
            value,
        )
    }

    // -----------------------------------------------------------------------
    // find_changed
    // -----------------------------------------------------------------------

    #[test]
    fn value_change_is_detected() {
        // Scenario A: same identity, value 10 -> 20.
        let baseline = vec![row("k1", "SYSTEM", Some("10"))];
        let live = vec![row("k1", "SYSTEM", Some("20"))];

        let changed = find_changed(&baseline, &live);
        changed.validate().unwrap();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed.rows[0].value_old.as_deref(), Some("10"));
        assert_eq!(changed.rows[0].value_now.as_deref(), Some("20"));
    }

    #[test]
    fn removed_override_is_detected() {
        // Scenario B: baseline override with no live counterpart.
        let baseline = vec![row("k1", "SYSTEM", Some("10"))];
        let live = vec![];

        let changed = find_changed(&baseline, &live);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed.rows[0].value_old.as_deref(), Some("10"));
        assert_eq!(changed.rows[0].value_now, None);
    }

    #[test]
    fn live_null_value_counts_as_removed() {
        let baseline = vec![row("k1", "SYSTEM", Some("10"))];
        let live = vec![row("k1", "SYSTEM", None)];

        let changed = find_changed(&baseline, &live);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed.rows[0].value_now, None);
    }

    #[test]
    fn equal_values_do_not_match() {
        let baseline = vec![row("k1", "SYSTEM", Some("10"))];
        let live = vec![row("k1", "SYSTEM", Some("10"))];
        assert!(find_changed(&baseline, &live).is_empty());
    }

    #[test]
    fn default_layer_baseline_rows_never_emit() {
        // The snapshot writer keeps DEFAULT rows out of the baseline, but a
        // hand-edited table must not produce phantom drift.
        let baseline = vec![row("k1", "DEFAULT", Some("10"))];
        let live = vec![];
        assert!(find_changed(&baseline, &live).is_empty());
    }

    #[test]
    fn null_baseline_value_with_live_value_is_not_a_change() {
        let baseline = vec![row("k1", "SYSTEM", None)];
        let live = vec![row("k1", "SYSTEM", Some("20"))];
        assert!(find_changed(&baseline, &live).is_empty());
    }

    #[test]
    fn identity_match_requires_every_field() {
        // Same key at a different layer scope is a different setting.
        let baseline = vec![row("k1", "SYSTEM", Some("10"))];
        let live = vec![db_row("k1", "T1", Some("20"))];

        let changed = find_changed(&baseline, &live);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed.rows[0].value_now, None);
    }

    #[test]
    fn duplicate_baseline_rows_emit_independently() {
        let baseline = vec![
            row("k1", "SYSTEM", Some("10")),
            row("k1", "SYSTEM", Some("10")),
        ];
        let live = vec![row("k1", "SYSTEM", Some("20"))];
        assert_eq!(find_changed(&baseline, &live).len(), 2);
    }

    #[test]
    fn duplicate_live_rows_emit_per_pairing() {
        let baseline = vec![row("k1", "SYSTEM", Some("10"))];
        let live = vec![
            row("k1", "SYSTEM", Some("20")),
            row("k1", "SYSTEM", Some("30")),
        ];
        let changed = find_changed(&baseline, &live);
        assert_eq!(changed.len(), 2);
        let nows: Vec<_> = changed
            .rows
            .iter()
            .map(|r| r.value_now.as_deref().unwrap())
            .collect();
        assert_eq!(nows, vec!["20", "30"]);
    }

    // -----------------------------------------------------------------------
    // find_new
    // -----------------------------------------------------------------------

    #[test]
    fn new_override_is_detected() {
        // Scenario C: a new DATABASE-layer override absent from baseline.
        let baseline = vec![];
        let live = vec![db_row("k2", "T1", Some("42"))];

        let new = find_new(&baseline, &live);
        new.validate().unwrap();
        assert_eq!(new.len(), 1);
        assert_eq!(new.rows[0].value_old, None);
        assert_eq!(new.rows[0].value_now.as_deref(), Some("42"));
        assert_eq!(new.rows[0].database_name, "T1");
    }

    #[test]
    fn default_layer_live_rows_are_skipped() {
        let baseline = vec![];
        let live = vec![row("k1", "DEFAULT", Some("10"))];
        assert!(find_new(&baseline, &live).is_empty());
    }

    #[test]
    fn baselined_override_is_not_new() {
        let baseline = vec![row("k1", "SYSTEM", Some("10"))];
        let live = vec![row("k1", "SYSTEM", Some("20"))];
        assert!(find_new(&baseline, &live).is_empty());
    }

    #[test]
    fn null_valued_baseline_row_still_counts_as_new() {
        let baseline = vec![row("k1", "SYSTEM", None)];
        let live = vec![row("k1", "SYSTEM", Some("20"))];

        let new = find_new(&baseline, &live);
        assert_eq!(new.len(), 1);
        assert_eq!(new.rows[0].value_old, None);
    }

    // -----------------------------------------------------------------------
    // Cross-pass properties
    // -----------------------------------------------------------------------

    #[test]
    fn identical_inputs_yield_no_drift() {
        // Scenario D.
        let rows = vec![
            row("k1", "SYSTEM", Some("10")),
            db_row("k2", "T1", Some("20")),
        ];
        assert!(find_changed(&rows, &rows).is_empty());
        assert!(find_new(&rows, &rows).is_empty());
    }

    #[test]
    fn removed_and_new_are_disjoint_for_one_identity() {
        // One requires a baseline match, the other its absence; the same
        // identity cannot appear in both in a single run.
        let baseline = vec![row("gone", "SYSTEM", Some("10"))];
        let live = vec![row("added", "SYSTEM", Some("20"))];

        let changed = find_changed(&baseline, &live);
        let new = find_new(&baseline, &live);
        assert_eq!(changed.len(), 1);
        assert_eq!(new.len(), 1);
        assert_ne!(changed.rows[0].key, new.rows[0].key);
    }

    #[test]
    fn output_order_is_stable_across_runs() {
        let baseline = vec![
            row("a", "SYSTEM", Some("1")),
            row("b", "SYSTEM", Some("2")),
            row("c", "SYSTEM", Some("3")),
        ];
        let live = vec![
            row("c", "SYSTEM", Some("30")),
            row("b", "SYSTEM", Some("20")),
            row("d", "SYSTEM", Some("40")),
        ];

        let first = (find_changed(&baseline, &live), find_new(&baseline, &live));
        let second = (find_changed(&baseline, &live), find_new(&baseline, &live));
        assert_eq!(first, second);

        // Emission follows input order, not hash order.
        let keys: Vec<_> = first.0.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
