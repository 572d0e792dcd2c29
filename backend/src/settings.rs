//! Service settings loaded via OrthoConfig.
//!
//! Values come from `USER_REGISTRY_*` environment variables, then the
//! command line. Everything is optional.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while resolving the bind address.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `host` is not an IP address.
    #[error("invalid host `{host}`: {source}")]
    InvalidHost {
        /// Configured value.
        host: String,
        /// Parser failure.
        source: std::net::AddrParseError,
    },
}

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_REGISTRY")]
pub struct ServiceSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// Port to bind; defaults to 8080.
    pub port: Option<u16>,
    /// Start with an empty directory instead of the demo roster.
    #[ortho_config(default = false)]
    pub start_empty: bool,
}

impl ServiceSettings {
    /// Return the configured port, falling back to the default.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref() {
            None => DEFAULT_HOST,
            Some(host) => host.parse().map_err(|source| SettingsError::InvalidHost {
                host: host.to_owned(),
                source,
            })?,
        };
        Ok(SocketAddr::new(ip, self.port()))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for service settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServiceSettings {
        ServiceSettings::load_from_iter([OsString::from("user-registry")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("USER_REGISTRY_HOST", None::<String>),
            ("USER_REGISTRY_PORT", None::<String>),
            ("USER_REGISTRY_START_EMPTY", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.start_empty);
        assert_eq!(
            settings.bind_addr().expect("default address"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USER_REGISTRY_HOST", Some("127.0.0.1".to_owned())),
            ("USER_REGISTRY_PORT", Some("3000".to_owned())),
            ("USER_REGISTRY_START_EMPTY", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.start_empty);
        assert_eq!(
            settings.bind_addr().expect("configured address"),
            SocketAddr::from(([127, 0, 0, 1], 3000))
        );
    }

    #[rstest]
    fn unparseable_host_is_reported() {
        let settings = ServiceSettings {
            host: Some("not a host".to_owned()),
            port: None,
            start_empty: false,
        };
        let error = settings.bind_addr().expect_err("host is rejected");
        assert!(error.to_string().starts_with("invalid host `not a host`"));
    }
}
