//! Core traits and types shared by the solute transport crates.
//!
//! - [`Model`] — a deterministic callable that maps a typed input to a typed output
//! - [`Snapshot`] — an input paired with the output it produced
//! - [`constraint`] — type-level numeric invariants checked once at construction

pub mod constraint;
mod model;

pub use model::{Model, Snapshot};
