//! Command handlers for the floc CLI.
//!
//! Each handler renders into a `String` so the output can be tested; `run_*`
//! prints it.

mod inspect;
mod table;

pub use inspect::{render_records, run_inspect, sample_records};
pub use table::{render_table, run_table};
