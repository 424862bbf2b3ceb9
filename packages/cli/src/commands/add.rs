//! dockhand add - Add a new host

use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;
use dockhand_core::{load_config, save_config};

use super::list::print_hosts;
use crate::output::RenderOptions;

/// Arguments for the add command
#[derive(Args)]
pub struct AddArgs {
    /// Name to identify this host (e.g., "prod", "staging")
    pub name: String,

    /// Daemon endpoint, e.g. tcp://10.0.0.1:2375 or unix:///var/run/docker.sock
    pub url: String,

    /// Description for this host
    #[arg(value_name = "DESCRIPTION", num_args = 0..)]
    pub description: Vec<String>,
}

pub fn cmd_add(args: &AddArgs, config_path: &Path, options: &RenderOptions) -> Result<()> {
    let mut config = load_config(config_path)?;

    let description = args.description.join(" ");
    config.add_host(&args.name, &args.url, &description)?;
    save_config(&config, config_path)?;

    if !options.quiet {
        println!(
            "{} Host '{}' added ({}) and made the default.",
            style("Added:").green(),
            style(&args.name).cyan(),
            args.url
        );
        println!();
    }
    print_hosts(&config, options);
    Ok(())
}
