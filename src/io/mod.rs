//! Input/output helpers.
//!
//! - view exports (CSV/JSON) (`export`)

pub mod export;

pub use export::*;
