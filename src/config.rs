use std::time::Duration;

/// Default scoring backend host, used when `BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Default bound on the outbound scoring call.
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Scoring backend host, without the `/predict` path.
    pub backend_url: String,
    pub backend_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            backend_timeout: Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            backend_url: std::env::var("BACKEND_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|url| validate_backend_url(&url))
                .transpose()?
                .unwrap_or(defaults.backend_url),
            backend_timeout: std::env::var("BACKEND_TIMEOUT_SECS")
                .ok()
                .map(|secs| -> anyhow::Result<Duration> {
                    let secs: u64 = secs.trim().parse().map_err(|_| {
                        anyhow::anyhow!("BACKEND_TIMEOUT_SECS must be a whole number of seconds")
                    })?;
                    if secs == 0 {
                        anyhow::bail!("BACKEND_TIMEOUT_SECS must be greater than zero");
                    }
                    Ok(Duration::from_secs(secs))
                })
                .transpose()?
                .unwrap_or(defaults.backend_timeout),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .map(|bytes| {
                    bytes
                        .trim()
                        .parse()
                        .map_err(|_| anyhow::anyhow!("MAX_BODY_BYTES must be a valid number"))
                })
                .transpose()?
                .unwrap_or(defaults.max_body_bytes),
        };

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Scoring backend URL: {}", config.backend_url);
        tracing::debug!("Scoring backend timeout: {:?}", config.backend_timeout);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Full URL of the backend prediction endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.backend_url.trim_end_matches('/'))
    }
}

fn validate_backend_url(raw: &str) -> anyhow::Result<String> {
    let url = raw.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("BACKEND_URL must start with http:// or https://");
    }
    url::Url::parse(url).map_err(|e| anyhow::anyhow!("BACKEND_URL is not a valid URL: {}", e))?;
    Ok(url.to_string())
}
