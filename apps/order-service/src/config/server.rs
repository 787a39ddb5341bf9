//! Server configuration for the HTTP endpoint.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address: an IPv4 or IPv6 literal.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// HTTP server port for REST endpoints (/orders, /health, /metrics).
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            http_port: default_http_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns an error if `bind_address` is not an IP address.
    pub fn listen_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.bind_address.trim().parse()?;
        Ok(SocketAddr::new(ip, self.http_port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn server(bind_address: &str) -> ServerConfig {
        ServerConfig {
            bind_address: bind_address.to_string(),
            http_port: 5000,
        }
    }

    #[test_case("0.0.0.0", "0.0.0.0:5000" ; "ipv4 wildcard")]
    #[test_case("127.0.0.1", "127.0.0.1:5000" ; "ipv4 loopback")]
    #[test_case("::", "[::]:5000" ; "ipv6 wildcard")]
    #[test_case("::1", "[::1]:5000" ; "ipv6 loopback")]
    fn listen_addr_formats(bind_address: &str, expected: &str) {
        let addr = server(bind_address).listen_addr().unwrap();
        assert_eq!(addr.to_string(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("localhost" ; "hostname")]
    #[test_case("[::1]" ; "bracketed")]
    fn listen_addr_rejects_non_ip(bind_address: &str) {
        assert!(server(bind_address).listen_addr().is_err());
    }
}

pub(crate) const fn default_http_port() -> u16 {
    5000
}

pub(crate) fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}
