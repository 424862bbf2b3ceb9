//! dockhand login - Log in to a registry through a host
//!
//! The target daemon reports which index server it authenticates
//! against; credentials are prompted with the stored identity as the
//! default, verified, then persisted encoded.

use std::path::Path;

use anyhow::{Result, bail};
use clap::Args;
use console::style;
use dialoguer::{Input, Password};
use dockhand_core::{AuthCredentials, DaemonClient, load_config, registry, save_config};

use super::connect_host;
use crate::output::{CommandSpinner, RenderOptions};

/// Arguments for the login command
#[derive(Args)]
pub struct LoginArgs {
    /// Host name (defaults to the current default host)
    pub name: Option<String>,
}

pub async fn cmd_login(args: &LoginArgs, config_path: &Path, options: &RenderOptions) -> Result<()> {
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

    let stored = config.index_server(&info.index_server_address);
    if !options.quiet {
        println!(
            "Logging in to {}",
            style(&info.index_server_address).cyan()
        );
    }

    let mut username_prompt = Input::<String>::new().with_prompt("Username");
    if !stored.username.is_empty() {
        username_prompt = username_prompt.default(stored.username.clone());
    }
    let username = username_prompt.interact_text()?;

    let password = Password::new().with_prompt("Password").interact()?;

    let mut email_prompt = Input::<String>::new()
        .with_prompt("Email")
        .allow_empty(true);
    if !stored.email.is_empty() {
        email_prompt = email_prompt.default(stored.email.clone());
    }
    let email = email_prompt.interact_text()?;

    let credentials = AuthCredentials {
        username,
        password,
        email,
        server_address: info.index_server_address.clone(),
    };

    let verify = CommandSpinner::new_maybe("Verifying credentials...", options.quiet);
    match registry::login(&mut config, &client, &credentials).await {
        Ok(_) => verify.clear(),
        Err(e) => {
            verify.fail("Login failed");
            return Err(e.into());
        }
    }

    save_config(&config, config_path)?;

    if !options.quiet {
        println!(
            "{} Logged in to {} as {}.",
            style("\u{2713}").green(),
            style(&info.index_server_address).cyan(),
            style(&credentials.username).cyan()
        );
    }
    Ok(())
}
