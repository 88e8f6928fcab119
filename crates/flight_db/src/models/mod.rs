//! Query inputs and outputs.
//!
//! Parameters are bound by name into catalog templates; every result row
//! comes back as a [`Record`].

mod params;
mod record;

pub use params::{Param, QueryParams};
pub use record::{Record, Value};
