use std::fmt::Write as _;

use cfgdrift_classify::ChangeSet;

/// An absent value in a summary line: the parameter sat at (or returned to)
/// its default.
const ABSENT: &str = "<default>";

fn shown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(ABSENT)
}

/// Render the change set as line-oriented text.
///
/// Two passes in insertion order: a `Changes detected:` section with one
/// `<key>, <old> -> <new>` line per change, then an `Implementation:`
/// section listing every reversal statement. An empty set renders as
/// `No changes detected.`.
pub fn render(changes: &ChangeSet) -> String {
    if changes.is_empty() {
        return "No changes detected.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("Changes detected:\n");
    for rec in changes.iter() {
        let _ = writeln!(
            out,
            "{}, {} -> {}",
            rec.param_key,
            shown(&rec.value_old),
            shown(&rec.value_now)
        );
    }

    out.push_str("\nImplementation:\n");
    for rec in changes.iter() {
        let _ = writeln!(out, "{}", rec.reversal);
    }

    out.push_str("\nDone.\n");
    out
}

/// Render the change records as a JSON array, insertion order preserved.
pub fn render_json(changes: &ChangeSet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(changes.records())
}
