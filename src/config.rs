use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// JSON catalog to serve instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let addr = env::var("ACADEMIA_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = parse_addr(&addr)?;

        let catalog_path = env::var_os("CATALOG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, catalog_path })
    }
}

pub fn parse_addr(raw: &str) -> Result<SocketAddr, AppError> {
    raw.parse::<SocketAddr>()
        .map_err(|e| AppError::Config(format!("ACADEMIA_ADDR is invalid ({raw}): {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_socket_address() {
        let addr = parse_addr("0.0.0.0:8080").expect("valid address");
        assert_eq!(addr.port(), 8080);
        assert_eq!(parse_addr(DEFAULT_ADDR).expect("valid default").port(), 3000);
    }

    #[test]
    fn rejects_invalid_address_as_config_error() {
        match parse_addr("localhost") {
            Err(AppError::Config(msg)) => assert!(msg.contains("localhost")),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
