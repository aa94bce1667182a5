//! Change classifier and reconciler for cfgdrift.
//!
//! Raw match tuples from the drift matcher become [`ChangeRecord`]s here:
//! the configuration layer is resolved to a [`LayerScope`] (with its
//! qualifying context), and a reversal statement is synthesized that would
//! restore the baseline value — or unset the parameter when the baseline
//! carried none. Records accumulate in an insertion-ordered [`ChangeSet`],
//! one per distinct `(parameter, layer scope)` key, first-write-wins.

pub mod change;
pub mod error;
pub mod reversal;
pub mod scope;

pub use change::{classify, ChangeRecord, ChangeSet};
pub use error::{ClassifyError, ClassifyResult};
pub use reversal::{set_statement, unset_statement};
pub use scope::LayerScope;
