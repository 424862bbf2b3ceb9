//! Registry auth manager
//!
//! Maps registry server addresses to stored credentials and applies
//! login/logout mutations. Each address is either logged out (no record,
//! or a record with an empty token) or logged in; a re-login simply
//! overwrites the stored credentials.
//!
//! The stored token is base64 of `username:password` — the stored-
//! credential convention the engine ecosystem uses. It is reversible by
//! design and must be treated as obfuscation, never as a security
//! boundary.

mod error;

pub use error::RegistryError;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::config::{Config, IndexServer};
use crate::docker::{AuthCredentials, DaemonClient, DockerError};

/// Encode a credential pair into a stored auth token
pub fn encode_auth(username: &str, password: &str) -> String {
    BASE64.encode(format!("{username}:{password}"))
}

/// Recover the credential pair from a stored auth token
pub fn decode_auth(token: &str) -> Result<(String, String), RegistryError> {
    let bytes = BASE64
        .decode(token)
        .map_err(|e| RegistryError::InvalidToken(e.to_string()))?;
    let text =
        String::from_utf8(bytes).map_err(|e| RegistryError::InvalidToken(e.to_string()))?;
    let (username, password) = text
        .split_once(':')
        .ok_or_else(|| RegistryError::InvalidToken("missing separator".to_string()))?;
    Ok((username.to_string(), password.to_string()))
}

impl Config {
    /// Look up the login record for a server address
    ///
    /// Exact string match, no address normalization. An unseen address
    /// yields a synthetic logged-out record that is not inserted into
    /// the config until a login succeeds.
    pub fn index_server(&self, address: &str) -> IndexServer {
        self.index_servers
            .iter()
            .find(|s| s.url == address)
            .cloned()
            .unwrap_or_else(|| IndexServer {
                url: address.to_string(),
                ..Default::default()
            })
    }

    /// Insert or replace the login record for `server.url`
    pub fn set_index_server(&mut self, server: IndexServer) {
        match self.index_servers.iter_mut().find(|s| s.url == server.url) {
            Some(existing) => *existing = server,
            None => self.index_servers.push(server),
        }
    }

    /// Clear the stored token for a server address
    ///
    /// The record itself is retained so the username and email stay
    /// available as prompts on the next login.
    pub fn logout_index_server(&mut self, address: &str) -> Result<(), RegistryError> {
        let server = self
            .index_servers
            .iter_mut()
            .find(|s| s.url == address)
            .ok_or_else(|| RegistryError::NotFound(address.to_string()))?;

        if server.auth.is_empty() {
            return Err(RegistryError::AlreadyLoggedOut(address.to_string()));
        }

        server.auth.clear();
        Ok(())
    }
}

/// Log in to the registry at `credentials.server_address`
///
/// Verification is delegated to the daemon client; only on success is
/// the token computed and the record upserted. Nothing is written on
/// failure.
pub async fn login<C: DaemonClient>(
    config: &mut Config,
    client: &C,
    credentials: &AuthCredentials,
) -> Result<IndexServer, RegistryError> {
    client.auth(credentials).await.map_err(|e| match e {
        DockerError::AuthDenied(msg) => RegistryError::Auth(msg),
        other => RegistryError::Transport(other.to_string()),
    })?;

    let server = IndexServer {
        url: credentials.server_address.clone(),
        username: credentials.username.clone(),
        email: credentials.email.clone(),
        auth: encode_auth(&credentials.username, &credentials.password),
    };
    config.set_index_server(server.clone());

    tracing::debug!("Stored login for {}", server.url);
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docker::{ContainerListOptions, ContainerSummary, DaemonInfo};

    const ADDR: &str = "https://index.docker.io/v1/";

    /// Daemon stub that accepts or rejects every auth attempt
    struct StubDaemon {
        accept: bool,
    }

    impl DaemonClient for StubDaemon {
        async fn info(&self) -> Result<DaemonInfo, DockerError> {
            Ok(DaemonInfo {
                index_server_address: ADDR.to_string(),
                ..Default::default()
            })
        }

        async fn list_containers(
            &self,
            _options: &ContainerListOptions,
        ) -> Result<Vec<ContainerSummary>, DockerError> {
            Ok(Vec::new())
        }

        async fn auth(&self, credentials: &AuthCredentials) -> Result<(), DockerError> {
            if self.accept {
                Ok(())
            } else {
                Err(DockerError::AuthDenied(format!(
                    "credentials rejected by {}",
                    credentials.server_address
                )))
            }
        }
    }

    fn credentials() -> AuthCredentials {
        AuthCredentials {
            username: "alice".to_string(),
            password: "s3cret".to_string(),
            email: "alice@example.com".to_string(),
            server_address: ADDR.to_string(),
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let cases = [
            ("alice", "s3cret"),
            ("bob", ""),
            ("", "only-password"),
            ("colon", "pass:with:colons"),
            ("unicode", "pässwörd"),
        ];
        for (user, pass) in cases {
            let token = encode_auth(user, pass);
            let (u, p) = decode_auth(&token).unwrap();
            assert_eq!((u.as_str(), p.as_str()), (user, pass));
        }
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_auth("not base64!!"),
            Err(RegistryError::InvalidToken(_))
        ));
        // Valid base64 but no separator
        assert!(matches!(
            decode_auth(&BASE64.encode("no-separator-here")),
            Err(RegistryError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_unseen_address_resolves_logged_out() {
        let config = Config::default();
        let server = config.index_server(ADDR);

        assert_eq!(server.url, ADDR);
        assert!(server.username.is_empty());
        assert!(!server.is_logged_in());
        // The synthetic record is not persisted
        assert!(config.index_servers.is_empty());
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let mut config = Config::default();
        config.set_index_server(IndexServer {
            url: ADDR.to_string(),
            auth: "token".to_string(),
            ..Default::default()
        });

        // Trailing slash matters; no normalization at this layer
        let trimmed = ADDR.trim_end_matches('/');
        assert!(!config.index_server(trimmed).is_logged_in());
        assert!(config.index_server(ADDR).is_logged_in());
    }

    #[tokio::test]
    async fn test_login_success_stores_record() {
        let mut config = Config::default();
        let daemon = StubDaemon { accept: true };

        let server = login(&mut config, &daemon, &credentials()).await.unwrap();
        assert!(server.is_logged_in());

        let stored = config.index_server(ADDR);
        assert_eq!(stored.username, "alice");
        assert_eq!(stored.email, "alice@example.com");
        let (user, pass) = decode_auth(&stored.auth).unwrap();
        assert_eq!(user, "alice");
        assert_eq!(pass, "s3cret");
    }

    #[tokio::test]
    async fn test_login_failure_writes_nothing() {
        let mut config = Config::default();
        let daemon = StubDaemon { accept: false };

        let err = login(&mut config, &daemon, &credentials()).await.unwrap_err();
        assert!(matches!(err, RegistryError::Auth(_)));
        assert!(config.index_servers.is_empty());
    }

    #[tokio::test]
    async fn test_relogin_overwrites_in_place() {
        let mut config = Config::default();
        let daemon = StubDaemon { accept: true };

        login(&mut config, &daemon, &credentials()).await.unwrap();

        let mut second = credentials();
        second.username = "bob".to_string();
        second.password = "hunter2".to_string();
        login(&mut config, &daemon, &second).await.unwrap();

        assert_eq!(config.index_servers.len(), 1);
        let stored = config.index_server(ADDR);
        assert_eq!(stored.username, "bob");
        assert_eq!(decode_auth(&stored.auth).unwrap().1, "hunter2");
    }

    #[tokio::test]
    async fn test_login_logout_logout_state_machine() {
        let mut config = Config::default();
        let daemon = StubDaemon { accept: true };

        login(&mut config, &daemon, &credentials()).await.unwrap();
        assert!(config.index_server(ADDR).is_logged_in());

        config.logout_index_server(ADDR).unwrap();
        let stored = config.index_server(ADDR);
        assert_eq!(stored.auth, "");
        // Identity is kept for the next login prompt
        assert_eq!(stored.username, "alice");

        let err = config.logout_index_server(ADDR).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyLoggedOut(_)));
    }

    #[test]
    fn test_logout_unseen_address() {
        let mut config = Config::default();
        assert!(matches!(
            config.logout_index_server(ADDR),
            Err(RegistryError::NotFound(_))
        ));
    }
}
