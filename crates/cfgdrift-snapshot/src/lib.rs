//! Snapshot writer for cfgdrift.
//!
//! [`capture`] loads every live configuration row whose layer is a real
//! override and stores it in the baseline table, either appending (first
//! initialization, table guaranteed empty) or after a destructive truncate
//! (re-baseline). The caller owns the transaction: nothing is durable until
//! it commits the session.

pub mod error;
pub mod writer;

pub use error::{SnapshotError, SnapshotResult};
pub use writer::capture;
