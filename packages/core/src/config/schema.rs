//! Configuration schema for dockhand
//!
//! Defines the persisted model: the host list, the current default host,
//! and per-registry login records. Field names are fixed by the on-disk
//! format and must not change.

use serde::{Deserialize, Serialize};

/// Root configuration structure
///
/// Serialized to/from `~/.config/dockhand/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Configured hosts, in insertion order
    #[serde(default)]
    pub hosts: Vec<Host>,

    /// Name of the host targeted when a command gives none explicitly.
    /// Empty only when no hosts are configured.
    #[serde(default, rename = "default")]
    pub default_host: String,

    /// Registry login records, keyed by server address
    #[serde(default, rename = "indexServers")]
    pub index_servers: Vec<IndexServer>,
}

/// A named profile describing how to reach one container-engine daemon
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Host {
    /// Unique, case-sensitive identifier
    pub name: String,

    /// Daemon endpoint, e.g. `tcp://10.0.0.1:2376` or `unix:///var/run/docker.sock`
    pub url: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Whether to talk TLS to the daemon. When false the fields below
    /// are retained but never used to configure a connection.
    #[serde(default)]
    pub tls: bool,

    /// Path to the CA certificate (PEM)
    #[serde(default, rename = "tlsCaCert")]
    pub tls_ca_cert: String,

    /// Path to the client certificate (PEM)
    #[serde(default, rename = "tlsCert")]
    pub tls_cert: String,

    /// Path to the client key (PEM)
    #[serde(default, rename = "tlsKey")]
    pub tls_key: String,

    /// Whether peer certificate verification is enforced
    #[serde(default, rename = "tlsVerify")]
    pub tls_verify: bool,
}

impl Host {
    /// Create a plaintext host with empty TLS material
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

/// Stored login state for one registry server address
///
/// An empty `auth` means "not logged in". The token is a reversible
/// encoding of the credentials, not a hash; see `registry::encode_auth`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IndexServer {
    /// Registry server address, unique key
    pub url: String,

    /// Last username used for this registry
    #[serde(default)]
    pub username: String,

    /// Last email used for this registry
    #[serde(default)]
    pub email: String,

    /// Encoded credentials; empty when logged out
    #[serde(default)]
    pub auth: String,
}

impl IndexServer {
    /// Whether this record holds stored credentials
    pub fn is_logged_in(&self) -> bool {
        !self.auth.is_empty()
    }
}
