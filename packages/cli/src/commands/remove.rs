//! dockhand remove - Remove a host

use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;
use dockhand_core::{load_config, save_config};

use super::list::print_hosts;
use crate::output::RenderOptions;

/// Arguments for the remove command
#[derive(Args)]
pub struct RemoveArgs {
    /// Name of the host to remove
    pub name: String,
}

pub fn cmd_remove(args: &RemoveArgs, config_path: &Path, options: &RenderOptions) -> Result<()> {
    let mut config = load_config(config_path)?;

    config.remove_host(&args.name)?;
    save_config(&config, config_path)?;

    if !options.quiet {
        println!(
            "{} Host '{}' removed.",
            style("Removed:").green(),
            style(&args.name).cyan()
        );
        println!();
    }
    print_hosts(&config, options);
    Ok(())
}
