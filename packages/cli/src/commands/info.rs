//! dockhand info - Show a host's daemon runtime information

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;
use dockhand_core::{DaemonClient, DaemonInfo, Host, load_config};

use super::connect_host;
use crate::output::{CommandSpinner, RenderOptions};

/// Arguments for the info command
#[derive(Args)]
pub struct InfoArgs {
    /// Host name (defaults to the current default host)
    pub name: Option<String>,
}

pub async fn cmd_info(args: &InfoArgs, config_path: &Path, options: &RenderOptions) -> Result<()> {
    let config = load_config(config_path)?;
    let (client, host) = connect_host(&config, args.name.as_deref().unwrap_or(""))?;

    let spinner = CommandSpinner::new_maybe(&format!("Querying {}...", host.name), options.quiet);
    let info = match client.info().await {
        Ok(info) => {
            spinner.clear();
            info
        }
        Err(e) => {
            spinner.fail("Daemon query failed");
            return Err(e.into());
        }
    };

    print!("{}", render_info(&host, &info, options));
    Ok(())
}

fn field(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "  {:<24} {}", style(format!("{label}:")).dim(), value);
}

fn yes_no(flag: bool, yes: &'static str, no: &'static str) -> &'static str {
    if flag { yes } else { no }
}

fn render_info(host: &Host, info: &DaemonInfo, options: &RenderOptions) -> String {
    let mut out = String::new();

    if !options.no_header {
        let _ = writeln!(out, "{}", style(&host.name).cyan().bold());
        out.push('\n');
    }

    field(&mut out, "URL", &host.url);
    if !host.description.is_empty() {
        field(&mut out, "Description", &host.description);
    }
    field(&mut out, "TLS", yes_no(host.tls, "Supported", "No"));
    if host.tls {
        field(&mut out, "  CA Certificate file", &host.tls_ca_cert);
        field(&mut out, "  Certificate file", &host.tls_cert);
        field(&mut out, "  Key file", &host.tls_key);
        field(&mut out, "  Verify", yes_no(host.tls_verify, "Required", "No"));
    }
    out.push('\n');

    field(&mut out, "Containers", info.containers);
    field(&mut out, "Images", info.images);
    field(&mut out, "Storage Driver", &info.storage_driver);
    for (key, value) in &info.driver_status {
        field(&mut out, &format!("  {key}"), value);
    }
    field(&mut out, "Kernel Version", &info.kernel_version);
    field(&mut out, "Operating System", &info.operating_system);
    field(&mut out, "CPUs", info.n_cpu);
    field(
        &mut out,
        "Total Memory",
        format!("{:.3} GB", info.mem_total as f64 / 1_000_000_000.0),
    );
    field(&mut out, "Index Server Address", &info.index_server_address);
    field(
        &mut out,
        "Memory Limit",
        yes_no(info.memory_limit, "Supported", "No"),
    );
    field(
        &mut out,
        "Swap Limit",
        yes_no(info.swap_limit, "Supported", "No"),
    );
    field(
        &mut out,
        "IPv4 Forwarding",
        yes_no(info.ipv4_forwarding, "Enabled", "Disabled"),
    );
    field(&mut out, "ID", &info.id);
    field(&mut out, "Name", &info.name);
    if !info.labels.is_empty() {
        field(&mut out, "Labels", info.labels.join(", "));
    }
    field(&mut out, "Debug Mode", yes_no(info.debug, "Yes", "No"));
    if info.debug {
        field(&mut out, "  Events Listeners", info.n_events_listener);
        field(&mut out, "  Fds", info.n_fd);
        field(&mut out, "  Goroutines", info.n_goroutines);
        field(&mut out, "  Root Dir", &info.root_dir);
    }

    out
}
