//! dockhand ps - List containers on a host

use std::path::Path;

use anyhow::Result;
use chrono::{Local, TimeZone};
use clap::Args;
use comfy_table::Cell;
use dockhand_core::{ContainerListOptions, ContainerSummary, DaemonClient, load_config};

use super::connect_host;
use crate::output::{CommandSpinner, RenderOptions, new_table};

/// Arguments for the ps command
#[derive(Args)]
pub struct PsArgs {
    /// Host name (defaults to the current default host)
    pub name: Option<String>,

    /// Show all containers. Only running containers are shown by default.
    #[arg(short, long)]
    pub all: bool,

    /// Show only the latest created container, include non-running ones.
    #[arg(short, long)]
    pub latest: bool,

    /// Display sizes
    #[arg(short, long)]
    pub size: bool,
}

pub async fn cmd_ps(args: &PsArgs, config_path: &Path, options: &RenderOptions) -> Result<()> {
    let config = load_config(config_path)?;
    let (client, host) = connect_host(&config, args.name.as_deref().unwrap_or(""))?;

    let list_options = ContainerListOptions {
        all: args.all || args.latest,
        latest: args.latest,
        size: args.size,
    };

    let spinner = CommandSpinner::new_maybe(&format!("Querying {}...", host.name), options.quiet);
    let containers = match client.list_containers(&list_options).await {
        Ok(containers) => {
            spinner.clear();
            containers
        }
        Err(e) => {
            spinner.fail("Daemon query failed");
            return Err(e.into());
        }
    };

    if options.quiet {
        for container in &containers {
            println!("{}", truncate(&container.id, 12));
        }
        return Ok(());
    }

    let mut header = vec![
        "ID",
        "Names",
        "Image",
        "Command",
        "Created at",
        "Status",
        "Ports",
    ];
    if args.size {
        header.push("Size(MB)");
    }

    let mut table = new_table(header, options);
    for container in &containers {
        let mut row = vec![
            Cell::new(truncate(&container.id, 12)),
            Cell::new(container.names.join(", ")),
            Cell::new(&container.image),
            Cell::new(truncate(&container.command, 20)),
            Cell::new(format_created(container.created)),
            Cell::new(&container.status),
            Cell::new(format_ports(container)),
        ];
        if args.size {
            let megabytes = container.size_rw.unwrap_or_default() as f64 / 1_000_000.0;
            row.push(Cell::new(format!("{megabytes:.3}")));
        }
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        s.chars().take(max_len).collect()
    }
}

fn format_created(created: i64) -> String {
    match Local.timestamp_opt(created, 0).single() {
        Some(when) => when.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}

fn format_ports(container: &ContainerSummary) -> String {
    container
        .ports
        .iter()
        .map(|p| match p.public_port {
            Some(public) => format!("{}:{}->{}/{}", p.ip, public, p.private_port, p.protocol),
            None => format!("{}/{}", p.private_port, p.protocol),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
