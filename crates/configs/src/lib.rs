use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub aggregator: AggregatorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

/// Upstream review-aggregator endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregatorConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.kayak.com/i/api/seo/reviews/v3".to_string()
}
fn default_connect_timeout() -> u64 { 5 }
fn default_request_timeout() -> u64 { 30 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.aggregator.normalize_from_env();
        self.aggregator.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl AggregatorConfig {
    /// Allow the env var to override the TOML value, so deployments can
    /// repoint the upstream without editing config files.
    pub fn normalize_from_env(&mut self) {
        if let Ok(url) = std::env::var("AGGREGATOR_BASE_URL") {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
        if self.base_url.ends_with('/') {
            let trimmed = self.base_url.trim_end_matches('/').len();
            self.base_url.truncate(trimmed);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow!(
                "aggregator.base_url is empty; set it in config.toml or via AGGREGATOR_BASE_URL"
            ));
        }
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("aggregator.base_url must start with http:// or https://"));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(anyhow!("aggregator timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let mut cfg = AppConfig::default();
        cfg.normalize_and_validate().expect("defaults valid");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.aggregator.base_url.starts_with("https://"));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut cfg = AppConfig::default();
        cfg.aggregator.base_url = "ftp://reviews.example.com".into();
        assert!(cfg.aggregator.validate().is_err());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let mut cfg = AggregatorConfig::default();
        cfg.base_url = "https://reviews.example.com/v3/".into();
        cfg.normalize_from_env();
        assert_eq!(cfg.base_url, "https://reviews.example.com/v3");
    }

    #[test]
    fn toml_round_trip() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9090

            [aggregator]
            base_url = "https://reviews.example.com/v3"
            request_timeout_secs = 10
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.aggregator.request_timeout_secs, 10);
        assert_eq!(cfg.aggregator.connect_timeout_secs, 5);
    }
}
