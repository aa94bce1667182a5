//! Drift matcher for cfgdrift.
//!
//! Detection is decomposed into two complementary one-sided joins on the
//! full parameter identity, replacing the full outer join the store cannot
//! be assumed to support:
//!
//! - [`find_changed`] — baseline-driven: values that differ between baseline
//!   and live, and baseline overrides with no live counterpart (reverted to
//!   default or removed)
//! - [`find_new`] — live-driven: overrides present live with no baseline
//!   counterpart (newly set since the last snapshot)
//!
//! Both produce a [`DriftRows`] batch whose 9-column descriptor must be
//! validated before any row is classified; a mismatch means the engine and
//! the store no longer agree on the drift tuple shape and is fatal.

pub mod drift_row;
pub mod error;
pub mod matcher;

pub use drift_row::{DriftRow, DriftRows, DRIFT_COLUMNS};
pub use error::{DiffError, DiffResult};
pub use matcher::{find_changed, find_new};
