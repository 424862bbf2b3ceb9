//! Host to connection-descriptor resolution
//!
//! Pure translation of a [`Host`] entry into the parameters a daemon
//! client is constructed from. Performs no I/O.

use std::path::PathBuf;

use super::DockerError;
use crate::config::Host;

/// Everything needed to construct a daemon client
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionDescriptor {
    /// Daemon endpoint address
    pub url: String,
    /// TLS parameters; `None` means a plaintext connection
    pub tls: Option<TlsConfig>,
}

/// TLS material for a daemon connection
#[derive(Debug, Clone, PartialEq)]
pub struct TlsConfig {
    pub ca_cert: PathBuf,
    pub cert: PathBuf,
    pub key: PathBuf,
    /// Whether peer certificate verification is enforced
    pub verify: bool,
}

/// Build a connection descriptor for a host
///
/// When the host has TLS disabled, the descriptor carries no TLS
/// sub-structure at all; its absence is what tells the transport to
/// stay plaintext. Fails only on a malformed host entry.
pub fn resolve(host: &Host) -> Result<ConnectionDescriptor, DockerError> {
    if host.url.trim().is_empty() {
        return Err(DockerError::InvalidEndpoint(format!(
            "host '{}' has no URL",
            host.name
        )));
    }

    let tls = host.tls.then(|| TlsConfig {
        ca_cert: PathBuf::from(&host.tls_ca_cert),
        cert: PathBuf::from(&host.tls_cert),
        key: PathBuf::from(&host.tls_key),
        verify: host.tls_verify,
    });

    Ok(ConnectionDescriptor {
        url: host.url.clone(),
        tls,
    })
}
