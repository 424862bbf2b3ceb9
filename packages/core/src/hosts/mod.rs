//! Host registry
//!
//! In-memory CRUD over the configured hosts plus the "which one is
//! current" selection. Operates on a loaded [`Config`]; persistence is
//! the caller's job. Lookup is an exact, case-sensitive match on the
//! host name; insertion order is preserved for display.

mod error;

pub use error::HostError;

use crate::config::{Config, Host};

impl Config {
    /// Look up a host by name
    ///
    /// An empty `name` resolves through the configured default host.
    pub fn host(&self, name: &str) -> Result<&Host, HostError> {
        let target = if name.is_empty() {
            self.default_host.as_str()
        } else {
            name
        };
        if target.is_empty() {
            return Err(HostError::NoDefault);
        }
        self.hosts
            .iter()
            .find(|h| h.name == target)
            .ok_or_else(|| HostError::NotFound(target.to_string()))
    }

    /// Whether a host with that exact name is configured
    pub fn has_host(&self, name: &str) -> bool {
        self.hosts.iter().any(|h| h.name == name)
    }

    /// Make `name` the default host
    pub fn switch_default(&mut self, name: &str) -> Result<(), HostError> {
        let resolved = self.host(name)?.name.clone();
        self.default_host = resolved;
        Ok(())
    }

    /// Add a new plaintext host and make it the default
    pub fn add_host(
        &mut self,
        name: &str,
        url: &str,
        description: &str,
    ) -> Result<(), HostError> {
        if name.is_empty() {
            return Err(HostError::EmptyName);
        }
        if self.has_host(name) {
            return Err(HostError::AlreadyExists(name.to_string()));
        }

        self.default_host = name.to_string();
        self.hosts.push(Host::new(name, url, description));
        Ok(())
    }

    /// Remove a host, preserving the order of the rest
    ///
    /// The current default is protected; switch away before removing it.
    pub fn remove_host(&mut self, name: &str) -> Result<(), HostError> {
        if !self.default_host.is_empty() && name == self.default_host {
            return Err(HostError::Protected(name.to_string()));
        }
        let index = self
            .hosts
            .iter()
            .position(|h| h.name == name)
            .ok_or_else(|| HostError::NotFound(name.to_string()))?;
        self.hosts.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_host_config() -> Config {
        let mut config = Config::default();
        config.add_host("a", "tcp://a:2375", "").unwrap();
        config.add_host("b", "tcp://b:2375", "").unwrap();
        config
    }

    #[test]
    fn test_add_makes_host_the_default() {
        let mut config = Config::default();
        config.add_host("prod", "tcp://10.0.0.1:2375", "").unwrap();

        assert_eq!(config.default_host, "prod");
        let host = config.host("prod").unwrap();
        assert_eq!(host.url, "tcp://10.0.0.1:2375");
        assert_eq!(host.description, "");
        assert!(!host.tls);

        // Each added host takes over as default, unconditionally
        config.add_host("staging", "tcp://10.0.0.2:2375", "").unwrap();
        assert_eq!(config.default_host, "staging");
    }

    #[test]
    fn test_add_empty_name_is_rejected() {
        let mut config = two_host_config();

        let err = config.add_host("", "tcp://x:2375", "").unwrap_err();
        assert!(matches!(err, HostError::EmptyName));
        assert_eq!(config.hosts.len(), 2);
        // The failed add must not steal the default
        assert_eq!(config.default_host, "b");

        // An empty name never reaches the registry, so removing by empty
        // name is a plain lookup miss, not a protected-default bypass
        assert!(matches!(
            config.remove_host(""),
            Err(HostError::NotFound(_))
        ));
        assert!(matches!(
            config.remove_host("b"),
            Err(HostError::Protected(_))
        ));
        assert_eq!(config.hosts.len(), 2);
    }

    #[test]
    fn test_add_duplicate_name_fails() {
        let mut config = Config::default();
        config.add_host("prod", "tcp://a:2375", "").unwrap();

        let err = config.add_host("prod", "tcp://b:2375", "").unwrap_err();
        assert!(matches!(err, HostError::AlreadyExists(name) if name == "prod"));
        assert_eq!(config.hosts.len(), 1);
        assert_eq!(config.host("prod").unwrap().url, "tcp://a:2375");
    }

    #[test]
    fn test_empty_name_resolves_default() {
        let config = two_host_config();
        assert_eq!(config.host("").unwrap().name, "b");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let config = two_host_config();
        assert!(matches!(config.host("A"), Err(HostError::NotFound(_))));
    }

    #[test]
    fn test_empty_config_has_no_default() {
        let config = Config::default();
        assert!(matches!(config.host(""), Err(HostError::NoDefault)));
        assert!(matches!(config.host("prod"), Err(HostError::NotFound(_))));
    }

    #[test]
    fn test_stale_default_is_not_found() {
        let mut config = two_host_config();
        config.default_host = "gone".into();
        assert!(matches!(config.host(""), Err(HostError::NotFound(name)) if name == "gone"));
    }

    #[test]
    fn test_switch_default() {
        let mut config = two_host_config();
        config.switch_default("a").unwrap();
        assert_eq!(config.default_host, "a");

        let err = config.switch_default("staging").unwrap_err();
        assert!(matches!(err, HostError::NotFound(name) if name == "staging"));
        assert_eq!(config.default_host, "a");
    }

    #[test]
    fn test_remove_default_is_protected() {
        let mut config = two_host_config();
        let before = config.clone();

        let err = config.remove_host("b").unwrap_err();
        assert!(matches!(err, HostError::Protected(name) if name == "b"));
        assert_eq!(config, before);
    }

    #[test]
    fn test_remove_missing_host() {
        let mut config = two_host_config();
        assert!(matches!(
            config.remove_host("nope"),
            Err(HostError::NotFound(_))
        ));
    }

    #[test]
    fn test_switch_then_remove_former_default() {
        let mut config = two_host_config();
        config.switch_default("b").unwrap();
        config.remove_host("a").unwrap();

        let names: Vec<&str> = config.hosts.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["b"]);
        assert_eq!(config.default_host, "b");
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut config = Config::default();
        config.add_host("a", "tcp://a:2375", "").unwrap();
        config.add_host("b", "tcp://b:2375", "").unwrap();
        config.add_host("c", "tcp://c:2375", "").unwrap();

        config.remove_host("b").unwrap();
        let names: Vec<&str> = config.hosts.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_default_always_names_existing_host_after_mutations() {
        let mut config = Config::default();
        config.add_host("a", "tcp://a:2375", "").unwrap();
        config.add_host("b", "tcp://b:2375", "").unwrap();
        config.switch_default("a").unwrap();
        config.remove_host("b").unwrap();
        config.add_host("c", "tcp://c:2375", "").unwrap();
        let _ = config.remove_host("c").unwrap_err(); // protected, no change

        assert!(!config.hosts.is_empty());
        assert!(config.has_host(&config.default_host));
    }

    #[test]
    fn test_fresh_store_scenario() {
        let mut config = Config::default();
        config.add_host("prod", "tcp://10.0.0.1:2375", "").unwrap();

        assert_eq!(config.hosts.len(), 1);
        assert_eq!(config.hosts[0].name, "prod");
        assert_eq!(config.default_host, "prod");

        assert!(matches!(
            config.switch_default("staging"),
            Err(HostError::NotFound(_))
        ));
        assert!(matches!(
            config.remove_host("prod"),
            Err(HostError::Protected(_))
        ));
    }
}
