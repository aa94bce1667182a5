//! Configuration store seam for cfgdrift.
//!
//! The drift engine never talks to a database driver directly; it talks to a
//! [`ConfigSession`]. A session exposes the live layered parameter view, the
//! persisted baseline table, and a commit boundary for the one write path
//! (snapshot capture). Everything else — drivers, credentials, wire formats —
//! lives behind an implementation of the trait.
//!
//! # Bundled backends
//!
//! - [`MemorySession`] — in-memory store for tests and embedding
//! - [`DirSession`] — a JSON directory (`instance.json`, `live.json`,
//!   `baseline.json`) with atomic write-then-rename commits
//!
//! A production deployment implements [`ConfigSession`] over the vendor's
//! client library; the handshake and contract checks are backend-independent.

pub mod dir;
pub mod error;
pub mod memory;
pub mod rowset;
pub mod session;

pub use dir::DirSession;
pub use error::{StoreError, StoreResult};
pub use memory::MemorySession;
pub use rowset::{RowSet, Value};
pub use session::{validate_instance, ConfigSession, InstanceIdentity, INSTANCE_COLUMNS};
