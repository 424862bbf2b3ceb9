//! CLI command implementations
//!
//! One module per subcommand. Every handler performs a single
//! load → mutate → save cycle against the config store.

mod add;
mod info;
mod list;
mod login;
mod logout;
mod ps;
mod remove;
mod switch;

pub use add::{AddArgs, cmd_add};
pub use info::{InfoArgs, cmd_info};
pub use list::{ListArgs, cmd_list};
pub use login::{LoginArgs, cmd_login};
pub use logout::{LogoutArgs, cmd_logout};
pub use ps::{PsArgs, cmd_ps};
pub use remove::{RemoveArgs, cmd_remove};
pub use switch::{SwitchArgs, cmd_switch};

use anyhow::Result;
use dockhand_core::{Config, EngineClient, Host, resolve};

/// Resolve a host by name (empty means the default host) and connect a
/// daemon client for it
pub(crate) fn connect_host(config: &Config, name: &str) -> Result<(EngineClient, Host)> {
    let host = config.host(name)?.clone();
    let descriptor = resolve(&host)?;
    let client = EngineClient::connect(&descriptor)?;
    Ok((client, host))
}
