//! Foundation types for cfgdrift.
//!
//! This crate provides the identity and row types shared by every other
//! cfgdrift crate: which setting a row addresses, at which configuration
//! layer, and what value it carried at one point in time.
//!
//! # Key Types
//!
//! - [`ParamId`] — Full identity of one configurable setting at one scope
//! - [`Layer`] — Configuration layer (DEFAULT, SYSTEM, DATABASE, HOST)
//! - [`ConfigRow`] — An `(identity, value)` pair from the baseline table or
//!   the live view

pub mod error;
pub mod layer;
pub mod param;
pub mod row;

pub use error::TypeError;
pub use layer::Layer;
pub use param::ParamId;
pub use row::ConfigRow;
