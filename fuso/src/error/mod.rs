//! Error types produced by the merge and reshape helpers.

mod constructors;
mod types;

pub use types::{FusoError, KeyOrigin};
