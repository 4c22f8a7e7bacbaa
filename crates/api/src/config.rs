//! Service configuration from environment variables.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// Browser origins allowed by CORS; `*` allows any.
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl ApiConfig {
    /// Read `API_HOST`, `API_PORT`, `UPLOAD_DIR`, `MAX_UPLOAD_BYTES` and
    /// `CORS_ALLOWED_ORIGINS`, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("API_PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                name: "API_PORT",
                expected: "port number",
                value: v.clone(),
            })?,
            None => defaults.port,
        };

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                name: "MAX_UPLOAD_BYTES",
                expected: "byte count",
                value: v.clone(),
            })?,
            None => defaults.max_upload_bytes,
        };

        let cors_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(v) => v
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.cors_origins,
        };

        Ok(Self {
            host: get("API_HOST").unwrap_or(defaults.host),
            port,
            upload_dir: get("UPLOAD_DIR").map(PathBuf::from).unwrap_or(defaults.upload_dir),
            max_upload_bytes,
            cors_origins,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, ApiConfig::default());
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8000");
        assert_eq!(cfg.max_upload_bytes, 10_485_760);
    }

    #[test]
    fn reads_overrides() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "9090"),
            ("UPLOAD_DIR", "/var/lib/ainventory/uploads"),
            ("MAX_UPLOAD_BYTES", "1024"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example ,"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9090");
        assert_eq!(cfg.upload_dir, PathBuf::from("/var/lib/ainventory/uploads"));
        assert_eq!(cfg.max_upload_bytes, 1024);
        assert_eq!(cfg.cors_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = ApiConfig::from_lookup(lookup(&[("API_PORT", "  "), ("UPLOAD_DIR", "")])).unwrap();
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.upload_dir, PathBuf::from("uploads"));
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = ApiConfig::from_lookup(lookup(&[("API_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("API_PORT"));

        let err = ApiConfig::from_lookup(lookup(&[("MAX_UPLOAD_BYTES", "-5")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "MAX_UPLOAD_BYTES", .. }));
    }
}
