use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Application-level constants
pub const APP_NAME: &str = "clinical-copilot";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display name of the hosted LLM provider.
pub const PROVIDER_NAME: &str = "Perplexity";

/// Model used when `LLM_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "sonar-pro";

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5001;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info,clinical_copilot=debug"
}

/// Runtime configuration resolved from the environment.
///
/// A missing or empty `PERPLEXITY_API_KEY` is a supported degraded mode,
/// not a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an injectable lookup. Used by tests to
    /// avoid touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("PERPLEXITY_API_KEY").filter(|key| !key.is_empty());
        let model = lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            api_key,
            model,
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
        }
    }

    /// Whether a provider credential is present.
    pub fn configured(&self) -> bool {
        self.api_key.is_some()
    }
}
