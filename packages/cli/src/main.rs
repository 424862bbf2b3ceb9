//! dockhand CLI - entry point

use anyhow::Result;

fn main() -> Result<()> {
    dockhand::run()
}
