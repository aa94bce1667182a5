//! Change reporter for cfgdrift.
//!
//! Renders a classified change set in two passes: first one summary line
//! per change, then every reversal statement, both in insertion order. The
//! reporter only formats — it never mutates records and has no other side
//! effects.

pub mod render;

pub use render::{render, render_json};
