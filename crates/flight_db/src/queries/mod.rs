//! Database query functions.
//!
//! - `catalog`: the fixed flight query templates
//! - `flight`: binding and running a template against a pool

mod catalog;
mod flight;

pub use catalog::*;
pub use flight::*;
