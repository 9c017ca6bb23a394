//! Document sources: HTTP fetch, local files, and the built-in sample.

pub mod fetch;
pub mod sample;

pub use fetch::*;
pub use sample::*;
