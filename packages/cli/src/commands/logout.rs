//! dockhand logout - Log out from a registry through a host

use std::path::Path;

use anyhow::{Result, bail};
use clap::Args;
use console::style;
use dockhand_core::{DaemonClient, load_config, save_config};

use super::connect_host;
use crate::output::{CommandSpinner, RenderOptions};

/// Arguments for the logout command
#[derive(Args)]
pub struct LogoutArgs {
    /// Host name (defaults to the current default host)
    pub name: Option<String>,
}

pub async fn cmd_logout(
    args: &LogoutArgs,
    config_path: &Path,
    options: &RenderOptions,
) -> Result<()> {
    let mut config = load_config(config_path)?;
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

    if info.index_server_address.is_empty() {
        bail!("Daemon on '{}' reported no index server address", host.name);
    }

    config.logout_index_server(&info.index_server_address)?;
    save_config(&config, config_path)?;

    if !options.quiet {
        println!(
            "{} Logged out of {}.",
            style("\u{2713}").green(),
            style(&info.index_server_address).cyan()
        );
    }
    Ok(())
}
