//! dockhand list - List configured hosts

use std::path::Path;

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color};
use console::style;
use dockhand_core::{Config, load_config};

use crate::output::{RenderOptions, new_table};

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {}

pub fn cmd_list(_args: &ListArgs, config_path: &Path, options: &RenderOptions) -> Result<()> {
    let config = load_config(config_path)?;
    print_hosts(&config, options);
    Ok(())
}

/// Render the host table (shared with the commands that re-list after a
/// mutation)
pub(crate) fn print_hosts(config: &Config, options: &RenderOptions) {
    if options.quiet {
        for host in &config.hosts {
            println!("{}", host.name);
        }
        return;
    }

    if config.hosts.is_empty() {
        println!("No hosts configured.");
        println!();
        println!(
            "  {} {}",
            style("Add one with:").dim(),
            style("dockhand add <name> <url>").yellow()
        );
        return;
    }

    let mut table = new_table(vec!["", "Name", "URL", "Description", "TLS"], options);
    for host in &config.hosts {
        let is_default = host.name == config.default_host;

        let marker = if is_default { "*" } else { "" };
        let name_cell = if is_default {
            Cell::new(&host.name).fg(Color::Cyan)
        } else {
            Cell::new(&host.name)
        };

        table.add_row(vec![
            Cell::new(marker),
            name_cell,
            Cell::new(&host.url),
            Cell::new(&host.description),
            Cell::new(if host.tls { "YES" } else { "" }),
        ]);
    }

    println!("{table}");
}
