//! `horizons` library crate.
//!
//! The binary (`hz`) is a thin wrapper around this library so that:
//!
//! - derived-view logic is testable without spawning processes
//! - modules are reusable (e.g., future GUI/daemon, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
pub mod story;
pub mod tui;
pub mod view;
