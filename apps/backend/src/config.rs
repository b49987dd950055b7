//! Server configuration from environment variables (and an optional `.env`).

use std::path::PathBuf;

use anyhow::Context;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub problems_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    /// Read `HOST`, `PORT`, `PROBLEMS_DIR` and `STATIC_DIR`, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {}", value))?,
            Err(_) => 8000,
        };
        let problems_dir = std::env::var("PROBLEMS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./problems"));
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./static"));

        Ok(Self {
            host,
            port,
            problems_dir,
            static_dir,
        })
    }

    /// Socket address string for the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_port_is_an_error() {
        std::env::set_var("PORT", "not-a-port");
        let result = Config::from_env();
        std::env::remove_var("PORT");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid PORT value: not-a-port"));
    }
}
