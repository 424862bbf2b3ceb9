//! dockhand switch - Switch the default host

use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;
use dockhand_core::{load_config, save_config};

use super::list::print_hosts;
use crate::output::RenderOptions;

/// Arguments for the switch command
#[derive(Args)]
pub struct SwitchArgs {
    /// Name of the host to make current
    pub name: String,
}

pub fn cmd_switch(args: &SwitchArgs, config_path: &Path, options: &RenderOptions) -> Result<()> {
    let mut config = load_config(config_path)?;

    config.switch_default(&args.name)?;
    save_config(&config, config_path)?;

    if !options.quiet {
        println!(
            "{} Default host set to '{}'.",
            style("Updated:").green(),
            style(&args.name).cyan()
        );
        println!();
    }
    print_hosts(&config, options);
    Ok(())
}
