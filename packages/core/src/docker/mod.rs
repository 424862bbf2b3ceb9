//! Engine-client boundary
//!
//! The daemon itself is an external collaborator: everything the rest of
//! the system needs from it goes through the [`DaemonClient`] trait, so
//! command logic can be exercised against a mock. [`EngineClient`] is
//! the bollard-backed production implementation.

mod client;
mod error;
mod resolve;

pub use client::EngineClient;
pub use error::DockerError;
pub use resolve::{ConnectionDescriptor, TlsConfig, resolve};

/// Credentials presented to a registry during login
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthCredentials {
    pub username: String,
    pub password: String,
    pub email: String,
    /// Registry server address these credentials are for
    pub server_address: String,
}

/// Runtime information reported by a daemon
///
/// Only the fields the `info` view renders; everything else the engine
/// reports is dropped at the boundary.
#[derive(Debug, Clone, Default)]
pub struct DaemonInfo {
    pub containers: i64,
    pub images: i64,
    pub storage_driver: String,
    /// Driver detail pairs, e.g. ("Root Dir", "/var/lib/docker/overlay2")
    pub driver_status: Vec<(String, String)>,
    pub kernel_version: String,
    pub operating_system: String,
    pub n_cpu: i64,
    pub mem_total: i64,
    /// Address of the registry this daemon authenticates against
    pub index_server_address: String,
    pub memory_limit: bool,
    pub swap_limit: bool,
    pub ipv4_forwarding: bool,
    pub id: String,
    pub name: String,
    pub labels: Vec<String>,
    pub debug: bool,
    pub n_events_listener: i64,
    pub n_fd: i64,
    pub n_goroutines: i64,
    pub root_dir: String,
}

/// Options for a container listing
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerListOptions {
    /// Include stopped containers
    pub all: bool,
    /// Only the most recently created container
    pub latest: bool,
    /// Ask the daemon for size information
    pub size: bool,
}

/// One row of a container listing
#[derive(Debug, Clone, Default)]
pub struct ContainerSummary {
    pub id: String,
    pub names: Vec<String>,
    pub image: String,
    pub command: String,
    /// Creation time, seconds since the epoch
    pub created: i64,
    pub status: String,
    pub ports: Vec<PortBinding>,
    /// Writable-layer size in bytes, when requested
    pub size_rw: Option<i64>,
}

/// A published port on a container
#[derive(Debug, Clone, Default)]
pub struct PortBinding {
    pub ip: String,
    pub private_port: u16,
    pub public_port: Option<u16>,
    pub protocol: String,
}

/// Operations the rest of the system consumes from a daemon
pub trait DaemonClient {
    /// Query runtime status
    fn info(&self) -> impl Future<Output = Result<DaemonInfo, DockerError>> + Send;

    /// List containers
    fn list_containers(
        &self,
        options: &ContainerListOptions,
    ) -> impl Future<Output = Result<Vec<ContainerSummary>, DockerError>> + Send;

    /// Verify registry credentials on the daemon's behalf
    fn auth(
        &self,
        credentials: &AuthCredentials,
    ) -> impl Future<Output = Result<(), DockerError>> + Send;
}
