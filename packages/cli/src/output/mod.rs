//! Output utilities for CLI commands
//!
//! Table construction, render options, and the spinner shown around
//! daemon round-trips.

pub mod spinner;
pub mod table;

pub use spinner::CommandSpinner;
pub use table::{RenderOptions, new_table};
