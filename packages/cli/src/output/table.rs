//! Table construction helpers
//!
//! Rendering behavior is driven by an explicit [`RenderOptions`] value
//! handed down from the parsed CLI flags, never by ambient state.

use comfy_table::{Table, presets};

/// Presentation flags shared by all commands
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Only display primary values (names, IDs), one per line
    pub quiet: bool,
    /// Omit table headers and borders
    pub no_header: bool,
}

/// Build a table with the given header, honoring the render options
pub fn new_table(header: Vec<&str>, options: &RenderOptions) -> Table {
    let mut table = Table::new();
    if options.no_header {
        table.load_preset(presets::NOTHING);
    } else {
        table.set_header(header);
    }
    table
}
