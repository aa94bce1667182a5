use std::str::FromStr;

use cfgdrift_diff::DriftRow;
use cfgdrift_types::Layer;

use crate::error::{ClassifyError, ClassifyResult};

/// A resolved configuration layer with its qualifying context.
///
/// `SYSTEM` needs no qualifier; `DATABASE` and `HOST` carry the database
/// name or host the override is scoped to. The scope feeds both the
/// human-readable change key and the reversal statement's layer clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerScope {
    System,
    Database(String),
    Host(String),
}

impl LayerScope {
    /// Resolve a match tuple's layer to a scope.
    ///
    /// Anything outside `{SYSTEM, DATABASE, HOST}` is rejected — including
    /// `DEFAULT`, which by construction never reaches classification.
    pub fn resolve(row: &DriftRow) -> ClassifyResult<Self> {
        match Layer::from_str(&row.layer_name) {
            Ok(Layer::System) => Ok(LayerScope::System),
            Ok(Layer::Database) => Ok(LayerScope::Database(row.database_name.clone())),
            Ok(Layer::Host) => Ok(LayerScope::Host(row.host.clone())),
            Ok(Layer::Default) | Err(_) => {
                Err(ClassifyError::UnrecognizedLayer(row.layer_name.clone()))
            }
        }
    }

    /// The scope label used in change keys: `system`, `DB (<name>)`,
    /// `host (<name>)`.
    pub fn label(&self) -> String {
        match self {
            LayerScope::System => "system".to_string(),
            LayerScope::Database(db) => format!("DB ({db})"),
            LayerScope::Host(host) => format!("host ({host})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfgdrift_types::ParamId;

    fn row(layer: &str, db: &str, host: &str) -> DriftRow {
        DriftRow::new(
            &ParamId::new(host, "f.ini", "s", "k", layer, db, None),
            Some("1".into()),
            Some("2".into()),
        )
    }

    #[test]
    fn system_has_no_qualifier() {
        let scope = LayerScope::resolve(&row("SYSTEM", "", "h1")).unwrap();
        assert_eq!(scope, LayerScope::System);
        assert_eq!(scope.label(), "system");
    }

    #[test]
    fn database_is_qualified_by_database_name() {
        let scope = LayerScope::resolve(&row("DATABASE", "T1", "h1")).unwrap();
        assert_eq!(scope, LayerScope::Database("T1".to_string()));
        assert_eq!(scope.label(), "DB (T1)");
    }

    #[test]
    fn host_is_qualified_by_host() {
        let scope = LayerScope::resolve(&row("HOST", "", "hana02")).unwrap();
        assert_eq!(scope, LayerScope::Host("hana02".to_string()));
        assert_eq!(scope.label(), "host (hana02)");
    }

    #[test]
    fn default_layer_is_rejected() {
        assert_eq!(
            LayerScope::resolve(&row("DEFAULT", "", "h1")),
            Err(ClassifyError::UnrecognizedLayer("DEFAULT".to_string()))
        );
    }

    #[test]
    fn unknown_layer_is_rejected_verbatim() {
        assert_eq!(
            LayerScope::resolve(&row("TENANT", "", "h1")),
            Err(ClassifyError::UnrecognizedLayer("TENANT".to_string()))
        );
    }
}
