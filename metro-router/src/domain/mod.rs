//! Domain types for the transit network.
//!
//! Station and line names are validated at construction time, and a `Line`
//! guarantees a non-empty station sequence without repeats. Code that
//! receives these types can trust their validity.

mod error;
mod line;
mod station;

pub use error::TopologyError;
pub use line::{Direction, Line};
pub use station::{InvalidName, LineId, Station};
