//! dockhand-core - Core library for dockhand
//!
//! This library implements the pieces the CLI is built on: the persisted
//! multi-host configuration, the host registry, the engine-client
//! resolver, and registry credential bookkeeping.

pub mod config;
pub mod docker;
pub mod hosts;
pub mod registry;
pub mod version;

// Re-export bollard so CLI code can reach engine model types without
// pinning its own copy of the dependency.
pub use bollard;

pub use config::{Config, ConfigError, Host, IndexServer, load_config, save_config};
pub use docker::{
    AuthCredentials, ConnectionDescriptor, ContainerListOptions, ContainerSummary, DaemonClient,
    DaemonInfo, DockerError, EngineClient, PortBinding, TlsConfig, resolve,
};
pub use hosts::HostError;
pub use registry::{RegistryError, decode_auth, encode_auth, login};
pub use version::get_version;
