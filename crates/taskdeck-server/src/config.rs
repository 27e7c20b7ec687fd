use std::net::{IpAddr, SocketAddr};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "taskdeck-server", about = "Task collection backend")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "TASKDECK_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "TASKDECK_PORT", default_value = "8080")]
    pub port: u16,

    /// Browser origin allowed to call the API (e.g. http://localhost:5173).
    /// Without it no CORS headers are sent.
    #[arg(long, env = "TASKDECK_CORS_ORIGIN")]
    pub cors_origin: Option<String>,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::try_parse_from(["taskdeck-server"]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "taskdeck-server",
            "--bind",
            "127.0.0.1",
            "--port",
            "9000",
            "--cors-origin",
            "http://localhost:5173",
        ])
        .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:5173"));
    }
}
