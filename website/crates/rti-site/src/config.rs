//! Site configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{SiteError, SiteResult};

/// Site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Directory served under `/public`.
    pub public_dir: PathBuf,
    /// Root that template paths from the catalog are resolved against.
    pub documents_dir: PathBuf,
    /// Base URL of the content backend. `None` serves static content only.
    pub backend_url: Option<String>,
    /// How often region records are re-fetched from the backend.
    pub refresh_interval: Duration,
    /// Per-request timeout for backend calls.
    pub backend_timeout: Duration,
}

impl SiteConfig {
    /// Environment variable names read by [`from_env`](Self::from_env).
    pub const ADDR_VAR: &'static str = "RTI_SITE_ADDR";
    pub const PUBLIC_DIR_VAR: &'static str = "RTI_SITE_PUBLIC_DIR";
    pub const DOCUMENTS_DIR_VAR: &'static str = "RTI_SITE_DOCUMENTS_DIR";
    pub const BACKEND_URL_VAR: &'static str = "RTI_SITE_BACKEND_URL";
    pub const REFRESH_SECS_VAR: &'static str = "RTI_SITE_REFRESH_SECS";
    pub const BACKEND_TIMEOUT_SECS_VAR: &'static str = "RTI_SITE_BACKEND_TIMEOUT_SECS";

    /// Creates a configuration with default directories and no backend.
    pub fn new(bind_addr: impl Into<SocketAddr>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            ..Self::default()
        }
    }

    /// Reads overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if a variable is set but malformed.
    pub fn from_env() -> SiteResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SiteResult<Self> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(addr) = var(Self::ADDR_VAR) {
            config.bind_addr = addr
                .parse()
                .map_err(|e| SiteError::Config(format!("{}={addr:?}: {e}", Self::ADDR_VAR)))?;
        }
        if let Some(dir) = var(Self::PUBLIC_DIR_VAR) {
            config.public_dir = PathBuf::from(dir);
        }
        if let Some(dir) = var(Self::DOCUMENTS_DIR_VAR) {
            config.documents_dir = PathBuf::from(dir);
        }
        if let Some(url) = var(Self::BACKEND_URL_VAR) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(SiteError::Config(format!(
                    "{}={url:?}: expected an http(s) URL",
                    Self::BACKEND_URL_VAR
                )));
            }
            config.backend_url = Some(url);
        }
        if let Some(secs) = var(Self::REFRESH_SECS_VAR) {
            config.refresh_interval = parse_secs(Self::REFRESH_SECS_VAR, &secs)?;
        }
        if let Some(secs) = var(Self::BACKEND_TIMEOUT_SECS_VAR) {
            config.backend_timeout = parse_secs(Self::BACKEND_TIMEOUT_SECS_VAR, &secs)?;
        }

        Ok(config)
    }

    /// Sets the public assets directory.
    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = dir.into();
        self
    }

    /// Sets the documents directory.
    pub fn with_documents_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.documents_dir = dir.into();
        self
    }

    /// Enables the backend overlay.
    pub fn with_backend(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    /// Sets the backend refresh interval.
    ///
    /// The refresh task raises anything below
    /// [`MIN_REFRESH_INTERVAL`](crate::overlay::MIN_REFRESH_INTERVAL) to that minimum.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Sets the backend request timeout.
    pub fn with_backend_timeout(mut self, timeout: Duration) -> Self {
        self.backend_timeout = timeout;
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            public_dir: PathBuf::from("public"),
            documents_dir: PathBuf::from("documents"),
            backend_url: None,
            refresh_interval: Duration::from_secs(300),
            backend_timeout: Duration::from_secs(10),
        }
    }
}

fn parse_secs(name: &str, value: &str) -> SiteResult<Duration> {
    match value.parse::<u64>() {
        Ok(0) => Err(SiteError::Config(format!("{name}: must be greater than zero"))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(SiteError::Config(format!("{name}={value:?}: {e}"))),
    }
}
