//! dockhand CLI - operate several named container-engine daemons
//!
//! This module contains the shared CLI implementation: argument parsing,
//! config path resolution, and dispatch into the command handlers.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use dockhand_core::{config, get_version};

use output::RenderOptions;

/// Operate several named container-engine daemons
#[derive(Parser)]
#[command(name = "dockhand")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Switch between container-engine hosts, inspect them, and manage registry logins", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Only display primary values (names, IDs)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Omit table headers
    #[arg(short = 'n', long, global = true)]
    no_header: bool,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List hosts
    #[command(alias = "ls")]
    List(commands::ListArgs),
    /// Switch the default host
    #[command(alias = "sw")]
    Switch(commands::SwitchArgs),
    /// Show a host's daemon runtime information
    Info(commands::InfoArgs),
    /// Log in to a registry through a host
    Login(commands::LoginArgs),
    /// Log out from a registry through a host
    Logout(commands::LogoutArgs),
    /// Add a new host
    Add(commands::AddArgs),
    /// Remove a host
    #[command(alias = "rm", alias = "del")]
    Remove(commands::RemoveArgs),
    /// List containers on a host
    Ps(commands::PsArgs),
}

pub fn run() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config_path = cli
        .config
        .clone()
        .or_else(config::default_config_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

    tracing::debug!("Using config at {}", config_path.display());

    if cli.verbose > 0 {
        eprintln!(
            "{} Config: {}",
            style("[info]").cyan(),
            config_path.display()
        );
    }

    // Quiet and no-header travel as explicit render options; nothing in
    // the output layer reads process-global state.
    let render = RenderOptions {
        quiet: cli.quiet,
        no_header: cli.no_header,
    };

    match cli.command {
        Some(Commands::List(args)) => commands::cmd_list(&args, &config_path, &render),
        Some(Commands::Switch(args)) => commands::cmd_switch(&args, &config_path, &render),
        Some(Commands::Info(args)) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(commands::cmd_info(&args, &config_path, &render))
        }
        Some(Commands::Login(args)) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(commands::cmd_login(&args, &config_path, &render))
        }
        Some(Commands::Logout(args)) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(commands::cmd_logout(&args, &config_path, &render))
        }
        Some(Commands::Add(args)) => commands::cmd_add(&args, &config_path, &render),
        Some(Commands::Remove(args)) => commands::cmd_remove(&args, &config_path, &render),
        Some(Commands::Ps(args)) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(commands::cmd_ps(&args, &config_path, &render))
        }
        None => {
            // No command - show a welcome message and hint to use --help
            if !cli.quiet {
                println!(
                    "{} {}",
                    style("dockhand").cyan().bold(),
                    style(get_version()).dim()
                );
                println!();
                println!("Run {} for available commands.", style("--help").green());
            }
            Ok(())
        }
    }
}
