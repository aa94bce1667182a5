use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Scope at which a configuration parameter value is set.
///
/// Layers are ordered by specificity: [`Layer::Default`] is the shipped
/// value and never a real override, [`Layer::System`] applies instance-wide,
/// [`Layer::Database`] to a single tenant database, [`Layer::Host`] to a
/// single host. The layer determines what qualifying context a reversal
/// statement must carry.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Layer {
    Default,
    System,
    Database,
    Host,
}

impl Layer {
    /// Layers that represent real overrides (everything but `Default`).
    pub const OVERRIDES: [Layer; 3] = [Layer::System, Layer::Database, Layer::Host];

    /// The store's spelling of this layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Default => "DEFAULT",
            Layer::System => "SYSTEM",
            Layer::Database => "DATABASE",
            Layer::Host => "HOST",
        }
    }
}

impl FromStr for Layer {
    type Err = TypeError;

    /// Parse the store's spelling. Exact upper-case match only: an unknown
    /// layer must be rejected, never normalized into a known one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEFAULT" => Ok(Layer::Default),
            "SYSTEM" => Ok(Layer::System),
            "DATABASE" => Ok(Layer::Database),
            "HOST" => Ok(Layer::Host),
            other => Err(TypeError::UnrecognizedLayer(other.to_string())),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
