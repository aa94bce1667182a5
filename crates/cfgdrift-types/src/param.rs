use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layer::Layer;

/// The unique identity of one configurable setting at one scope.
///
/// Two rows with the same identity but different values represent the same
/// setting at two points in time (baseline vs. live). The identity carries
/// the raw `layer_name` string as the store returned it; parsing into a
/// [`Layer`] — and rejecting spellings outside the enumerated set — is the
/// classifier's job, not the row's.
///
/// Fields that do not apply at a given layer are empty strings (`port` is
/// `None`): a SYSTEM-layer row has no meaningful host or database name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParamId {
    pub host: String,
    pub file_name: String,
    pub section: String,
    pub key: String,
    pub layer_name: String,
    pub database_name: String,
    pub port: Option<i64>,
}

impl ParamId {
    /// Build an identity from its seven components, in store column order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        host: impl Into<String>,
        file_name: impl Into<String>,
        section: impl Into<String>,
        key: impl Into<String>,
        layer_name: impl Into<String>,
        database_name: impl Into<String>,
        port: Option<i64>,
    ) -> Self {
        Self {
            host: host.into(),
            file_name: file_name.into(),
            section: section.into(),
            key: key.into(),
            layer_name: layer_name.into(),
            database_name: database_name.into(),
            port,
        }
    }

    /// Whether this row sits at the `DEFAULT` layer. Defaults are not
    /// overrides: they are excluded from snapshots and from drift
    /// consideration.
    pub fn is_default_layer(&self) -> bool {
        self.layer_name == Layer::Default.as_str()
    }

    /// The parsed layer, if the store's spelling is one this engine models.
    pub fn layer(&self) -> Option<Layer> {
        Layer::from_str(&self.layer_name).ok()
    }
}
