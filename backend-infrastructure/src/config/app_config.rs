use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{DbConfig, RuntimeConfig};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub postprocess_queue_capacity: usize,
    pub postprocess_max_attempts: u32,
    pub authority_sync_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3270".to_string(),
            database_url: "postgres://localhost/stayline".to_string(),
            db_max_connections: 10,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            default_page_size: 50,
            max_page_size: 500,
            postprocess_queue_capacity: 1024,
            postprocess_max_attempts: 3,
            authority_sync_url: None,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("STAYLINE_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(url) = &self.authority_sync_url {
            if url.trim().is_empty() {
                self.authority_sync_url = None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.database_url.trim().is_empty() {
            return Err(anyhow!("database_url must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(anyhow!("page sizes must be greater than 0"));
        }
        if self.default_page_size > self.max_page_size {
            return Err(anyhow!("default_page_size must not exceed max_page_size"));
        }
        if self.postprocess_max_attempts == 0 {
            return Err(anyhow!("postprocess_max_attempts must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
            postprocess_queue_capacity: self.postprocess_queue_capacity,
            postprocess_max_attempts: self.postprocess_max_attempts,
            authority_sync_url: self.authority_sync_url.clone(),
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            database_url: self.database_url.clone(),
            max_connections: self.db_max_connections,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("STAYLINE_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("STAYLINE_DATABASE_URL") {
            self.database_url = value;
        }
        if let Ok(value) = env::var("STAYLINE_DB_MAX_CONNECTIONS") {
            self.db_max_connections = value.parse().unwrap_or(self.db_max_connections);
        }
        if let Ok(value) = env::var("STAYLINE_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("STAYLINE_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("STAYLINE_DEFAULT_PAGE_SIZE") {
            self.default_page_size = value.parse().unwrap_or(self.default_page_size);
        }
        if let Ok(value) = env::var("STAYLINE_MAX_PAGE_SIZE") {
            self.max_page_size = value.parse().unwrap_or(self.max_page_size);
        }
        if let Ok(value) = env::var("STAYLINE_POSTPROCESS_QUEUE_CAPACITY") {
            self.postprocess_queue_capacity =
                value.parse().unwrap_or(self.postprocess_queue_capacity);
        }
        if let Ok(value) = env::var("STAYLINE_POSTPROCESS_MAX_ATTEMPTS") {
            self.postprocess_max_attempts =
                value.parse().unwrap_or(self.postprocess_max_attempts);
        }
        if let Ok(value) = env::var("STAYLINE_AUTHORITY_SYNC_URL") {
            self.authority_sync_url = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn normalize_drops_blank_authority_url() {
        let mut config = AppConfig {
            authority_sync_url: Some("   ".to_string()),
            ..Default::default()
        };
        config.normalize();
        assert_eq!(config.authority_sync_url, None);
    }

    #[test]
    fn validation_rejects_inverted_page_sizes() {
        let config = AppConfig {
            default_page_size: 100,
            max_page_size: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
