use crate::scope::LayerScope;

/// Quote a string for embedding in a configuration-change statement,
/// doubling embedded single quotes.
fn quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// The layer clause of a statement: `'SYSTEM'`, `'DATABASE', '<db>'`, or
/// `'HOST', '<host>'`.
fn layer_clause(scope: &LayerScope) -> String {
    match scope {
        LayerScope::System => "'SYSTEM'".to_string(),
        LayerScope::Database(db) => format!("'DATABASE', {}", quoted(db)),
        LayerScope::Host(host) => format!("'HOST', {}", quoted(host)),
    }
}

/// A statement restoring a parameter to its baseline value.
pub fn set_statement(
    file_name: &str,
    scope: &LayerScope,
    section: &str,
    key: &str,
    value_old: &str,
) -> String {
    format!(
        "alter system alter configuration ({}, {}) set ({},{}) = {} with reconfigure;",
        quoted(file_name),
        layer_clause(scope),
        quoted(section),
        quoted(key),
        quoted(value_old),
    )
}

/// A statement removing a parameter override the baseline never had.
pub fn unset_statement(file_name: &str, scope: &LayerScope, section: &str, key: &str) -> String {
    format!(
        "alter system alter configuration ({}, {}) unset ({},{}) with reconfigure;",
        quoted(file_name),
        layer_clause(scope),
        quoted(section),
        quoted(key),
    )
}
