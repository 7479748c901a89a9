//! Server configuration
//!
//! Values come from the command line, falling back to environment variables:
//!
//! - `CALENDAR_PORT`: port to listen on (required)
//! - `CALENDAR_HOST`: bind address (default `127.0.0.1`)
//! - `CALENDAR_LOG_LEVEL`: tracing filter used when `RUST_LOG` is unset (default `info`)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Calendar event HTTP server
#[derive(Parser, Debug, Clone)]
#[command(name = "calendar-server")]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(env = "CALENDAR_PORT")]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "CALENDAR_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Log filter directive, e.g. `debug` or `calendar_events=trace`
    #[arg(long, env = "CALENDAR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// Address the listener binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_argument() {
        let config = ServerConfig::try_parse_from(["calendar-server", "8080"]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_parse_host_and_log_level() {
        let config = ServerConfig::try_parse_from([
            "calendar-server",
            "9000",
            "--host",
            "0.0.0.0",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(ServerConfig::try_parse_from(["calendar-server", "not-a-port"]).is_err());
        assert!(ServerConfig::try_parse_from(["calendar-server", "70000"]).is_err());
    }
}
