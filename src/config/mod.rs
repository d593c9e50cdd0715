use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Base directory for the JSON-backed catalog stores.
    pub data_dir: PathBuf,
    pub frontend_url: String,
}

impl AppConfig {
    /// Every variable has a default, so loading is infallible; an
    /// unparseable `SHASHA_PORT` is logged and falls back.
    pub fn from_env() -> Self {
        let port = env::var("SHASHA_PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse().unwrap_or_else(|e| {
            tracing::warn!(value = %port, error = %e, "Invalid SHASHA_PORT, using 3000");
            3000
        });
        Self {
            host: env::var("SHASHA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            data_dir: env::var("SHASHA_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_port_falls_back_to_default() {
        env::set_var("SHASHA_PORT", "not-a-port");
        let config = AppConfig::from_env();
        assert_eq!(config.port, 3000);
        env::remove_var("SHASHA_PORT");
    }
}
