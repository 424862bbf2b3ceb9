//! Bollard-backed daemon client
//!
//! Wraps a bollard `Docker` handle built from a [`ConnectionDescriptor`]
//! and implements the [`DaemonClient`] boundary on top of it.

use bollard::container::ListContainersOptions;
use bollard::service::{ContainerSummary as ApiContainerSummary, SystemInfo};
use bollard::{API_DEFAULT_VERSION, Docker};

use super::resolve::ConnectionDescriptor;
use super::{
    AuthCredentials, ContainerListOptions, ContainerSummary, DaemonClient, DaemonInfo,
    DockerError, PortBinding,
};

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Daemon client for one configured host
pub struct EngineClient {
    inner: Docker,
    http: reqwest::Client,
}

impl EngineClient {
    /// Connect to the daemon a descriptor points at
    ///
    /// `unix://` endpoints use the local socket transport; TLS hosts use
    /// the openssl transport with the descriptor's PEM material;
    /// everything else is plain HTTP.
    pub fn connect(descriptor: &ConnectionDescriptor) -> Result<Self, DockerError> {
        let inner = match &descriptor.tls {
            Some(tls) => {
                if !tls.verify {
                    // The openssl connector always verifies peers; the
                    // stored flag can't disable that.
                    tracing::warn!(
                        "tlsVerify is off for {}, but peer verification stays enforced",
                        descriptor.url
                    );
                }
                Docker::connect_with_ssl(
                    &descriptor.url,
                    &tls.key,
                    &tls.cert,
                    &tls.ca_cert,
                    DEFAULT_TIMEOUT_SECS,
                    API_DEFAULT_VERSION,
                )?
            }
            None if descriptor.url.starts_with("unix://") => Docker::connect_with_unix(
                &descriptor.url,
                DEFAULT_TIMEOUT_SECS,
                API_DEFAULT_VERSION,
            )?,
            None => Docker::connect_with_http(
                &descriptor.url,
                DEFAULT_TIMEOUT_SECS,
                API_DEFAULT_VERSION,
            )?,
        };

        tracing::debug!("Connected daemon client for {}", descriptor.url);
        Ok(Self {
            inner,
            http: reqwest::Client::new(),
        })
    }

    /// Access the inner bollard client for operations outside the boundary
    pub fn inner(&self) -> &Docker {
        &self.inner
    }
}

impl DaemonClient for EngineClient {
    async fn info(&self) -> Result<DaemonInfo, DockerError> {
        let info = self.inner.info().await.map_err(DockerError::from)?;
        Ok(convert_info(info))
    }

    async fn list_containers(
        &self,
        options: &ContainerListOptions,
    ) -> Result<Vec<ContainerSummary>, DockerError> {
        let api_options = ListContainersOptions::<String> {
            all: options.all,
            limit: options.latest.then_some(1),
            size: options.size,
            ..Default::default()
        };

        let containers = self
            .inner
            .list_containers(Some(api_options))
            .await
            .map_err(DockerError::from)?;

        Ok(containers.into_iter().map(convert_container).collect())
    }

    /// Verify credentials against the registry the daemon points at
    ///
    /// The engine API's auth endpoint has no binding in the client
    /// library, so this performs the same check the engine does: a
    /// basic-auth request to the index server's users route.
    async fn auth(&self, credentials: &AuthCredentials) -> Result<(), DockerError> {
        let address = credentials.server_address.trim_end_matches('/');
        let endpoint = if address.starts_with("http://") || address.starts_with("https://") {
            format!("{address}/users/")
        } else {
            format!("https://{address}/users/")
        };

        let response = self
            .http
            .get(&endpoint)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await
            .map_err(|e| DockerError::Connection(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            Err(DockerError::AuthDenied(format!(
                "credentials rejected by {}",
                credentials.server_address
            )))
        } else {
            Err(DockerError::Connection(format!(
                "unexpected status {status} from {}",
                credentials.server_address
            )))
        }
    }
}

fn convert_info(info: SystemInfo) -> DaemonInfo {
    let driver_status = info
        .driver_status
        .unwrap_or_default()
        .into_iter()
        .filter_map(|pair| {
            let mut iter = pair.into_iter();
            let key = iter.next()?;
            let value = iter.next().unwrap_or_default();
            Some((key, value))
        })
        .collect();

    DaemonInfo {
        containers: info.containers.unwrap_or_default(),
        images: info.images.unwrap_or_default(),
        storage_driver: info.driver.unwrap_or_default(),
        driver_status,
        kernel_version: info.kernel_version.unwrap_or_default(),
        operating_system: info.operating_system.unwrap_or_default(),
        n_cpu: info.ncpu.unwrap_or_default(),
        mem_total: info.mem_total.unwrap_or_default(),
        index_server_address: info.index_server_address.unwrap_or_default(),
        memory_limit: info.memory_limit.unwrap_or_default(),
        swap_limit: info.swap_limit.unwrap_or_default(),
        ipv4_forwarding: info.ipv4_forwarding.unwrap_or_default(),
        id: info.id.unwrap_or_default(),
        name: info.name.unwrap_or_default(),
        labels: info.labels.unwrap_or_default(),
        debug: info.debug.unwrap_or_default(),
        n_events_listener: info.n_events_listener.unwrap_or_default(),
        n_fd: info.nfd.unwrap_or_default(),
        n_goroutines: info.n_goroutines.unwrap_or_default(),
        root_dir: info.docker_root_dir.unwrap_or_default(),
    }
}

fn convert_container(container: ApiContainerSummary) -> ContainerSummary {
    let ports = container
        .ports
        .unwrap_or_default()
        .into_iter()
        .map(|p| PortBinding {
            ip: p.ip.unwrap_or_default(),
            private_port: p.private_port,
            public_port: p.public_port,
            protocol: p.typ.map(|t| t.to_string()).unwrap_or_default(),
        })
        .collect();

    ContainerSummary {
        id: container.id.unwrap_or_default(),
        names: container
            .names
            .unwrap_or_default()
            .into_iter()
            .map(|n| n.trim_start_matches('/').to_string())
            .collect(),
        image: container.image.unwrap_or_default(),
        command: container.command.unwrap_or_default(),
        created: container.created.unwrap_or_default(),
        status: container.status.unwrap_or_default(),
        ports,
        size_rw: container.size_rw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Host;
    use crate::docker::resolve;

    #[test]
    fn test_connect_plaintext_does_not_panic() {
        let host = Host::new("local", "unix:///var/run/docker.sock", "");
        let descriptor = resolve(&host).unwrap();
        // Connection is lazy; constructing the client must not require a
        // running daemon.
        let result = EngineClient::connect(&descriptor);
        drop(result);
    }

    #[test]
    fn test_convert_container_trims_name_prefix() {
        let api = ApiContainerSummary {
            id: Some("0123456789abcdef".to_string()),
            names: Some(vec!["/web".to_string(), "/web-alias".to_string()]),
            image: Some("nginx:latest".to_string()),
            command: Some("nginx -g 'daemon off;'".to_string()),
            created: Some(1_700_000_000),
            status: Some("Up 2 hours".to_string()),
            ..Default::default()
        };

        let summary = convert_container(api);
        assert_eq!(summary.names, vec!["web", "web-alias"]);
        assert_eq!(summary.image, "nginx:latest");
        assert_eq!(summary.size_rw, None);
    }

    #[test]
    fn test_convert_info_pairs_driver_status() {
        let info = SystemInfo {
            containers: Some(3),
            images: Some(12),
            driver: Some("overlay2".to_string()),
            driver_status: Some(vec![
                vec!["Backing Filesystem".to_string(), "extfs".to_string()],
                vec!["dangling".to_string()],
            ]),
            index_server_address: Some("https://index.docker.io/v1/".to_string()),
            ncpu: Some(8),
            nfd: Some(42),
            ..Default::default()
        };

        let converted = convert_info(info);
        assert_eq!(converted.containers, 3);
        assert_eq!(converted.n_cpu, 8);
        assert_eq!(converted.n_fd, 42);
        assert_eq!(converted.storage_driver, "overlay2");
        assert_eq!(converted.driver_status.len(), 2);
        assert_eq!(converted.driver_status[0].1, "extfs");
        assert_eq!(converted.driver_status[1].1, "");
        assert_eq!(converted.index_server_address, "https://index.docker.io/v1/");
    }
}
